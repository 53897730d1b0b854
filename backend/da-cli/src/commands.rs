use clap::{Args, Subcommand};

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Show every record (unmasked)
    List,

    /// Preview the roster with the selected users' identifiers masked
    View(MaskArgs),

    /// Overwrite the selected users' identifiers with masked values
    Save {
        #[command(flatten)]
        mask: MaskArgs,

        /// Confirm the irreversible overwrite
        #[arg(long)]
        yes: bool,
    },

    /// Add a user record
    Add {
        #[arg(long)]
        name: String,

        #[arg(long)]
        email: String,

        /// National ID number
        #[arg(long)]
        identifier_a: Option<String>,

        /// Tax ID number
        #[arg(long)]
        identifier_b: Option<String>,
    },

    /// Print an Argon2 hash for a `password` entry in config.toml
    HashPassword {
        /// Password to hash
        plaintext: String,
    },
}

impl Commands {
    pub fn name(&self) -> &'static str {
        match self {
            Self::List => "list",
            Self::View(_) => "view",
            Self::Save { .. } => "save",
            Self::Add { .. } => "add",
            Self::HashPassword { .. } => "hash-password",
        }
    }
}

#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct MaskArgs {
    /// User name to mask (repeatable)
    #[arg(long = "select", short = 's')]
    pub select: Vec<String>,

    /// Mask identifier A (national ID)
    #[arg(long)]
    pub mask_a: bool,

    /// Mask identifier B (tax ID)
    #[arg(long)]
    pub mask_b: bool,
}

impl MaskArgs {
    pub fn selection(&self) -> da_core::MaskSelection {
        da_core::MaskSelection::new(self.select.iter().cloned(), self.mask_a, self.mask_b)
    }

    pub fn is_requested(&self) -> bool {
        !self.select.is_empty() || self.mask_a || self.mask_b
    }
}
