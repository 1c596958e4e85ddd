/// Per-cell change classification written into the `transitions` table.
///
/// The discriminants are positions in a wider classification enumeration
/// used elsewhere in the engine (covering states such as "became null" and
/// "still null"); only the three variants below are ever produced by the
/// classifier, and the gaps between them are reserved for the rest.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum ValueTransition {
    /// The row existed before and the value is unchanged: both cells valid
    /// and equal.
    EqSame = 3,
    /// A value newly appeared: the row is new, or the previous cell was null
    /// while the current one is valid.
    NeqFromNull = 5,
    /// The row existed before and the value changed, including becoming
    /// null.
    NeqChanged = 7,
}

impl ValueTransition {
    /// The one-byte code stored in the `transitions` table.
    pub fn code(self) -> u8 {
        self as u8
    }

    /// Decode a stored transition code. Reserved codes the classifier never
    /// writes decode as `None`.
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            3 => Some(ValueTransition::EqSame),
            5 => Some(ValueTransition::NeqFromNull),
            7 => Some(ValueTransition::NeqChanged),
            _ => None,
        }
    }
}
