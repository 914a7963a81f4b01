/// How the suits of a starting hand cluster.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Suitedness {
    /// two or more suits held exactly twice
    DoubleSuited,
    /// one suit held four or five times
    NearMonotone,
    /// anything else, including a lone suited pair or three of one suit
    Rainbow,
}

impl Suitedness {
    pub const fn bonus(&self) -> u8 {
        match self {
            Suitedness::DoubleSuited => 2,
            Suitedness::NearMonotone => 1,
            Suitedness::Rainbow => 0,
        }
    }
}

impl std::fmt::Display for Suitedness {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.pad(match self {
            Suitedness::DoubleSuited => "double suited",
            Suitedness::NearMonotone => "near monotone",
            Suitedness::Rainbow => "no suit bonus",
        })
    }
}
