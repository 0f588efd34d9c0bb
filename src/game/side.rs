/// Per-slot, per-hole assignment. `Out` players sit the hole out and are
/// untouched by its settlement.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum Side {
    A,
    B,
    #[default]
    Out,
}

impl Side {
    pub fn is_playing(&self) -> bool {
        *self != Self::Out
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::A => write!(f, "A"),
            Self::B => write!(f, "B"),
            Self::Out => write!(f, "-"),
        }
    }
}

impl TryFrom<&str> for Side {
    type Error = &'static str;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s {
            "A" | "a" => Ok(Self::A),
            "B" | "b" => Ok(Self::B),
            "-" | "out" | "Out" => Ok(Self::Out),
            _ => Err("invalid side assignment"),
        }
    }
}
