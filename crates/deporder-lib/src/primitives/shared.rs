/// Implement `clap::ValueEnum` and `FromStr` for a fieldless enum from one
/// table of canonical names and aliases
///
/// Parsing ignores ASCII case and accepts any alias; unknown input becomes
/// [`ConfigError::ParseError`](crate::primitives::ConfigError::ParseError).
macro_rules! cli_value_enum {
    (
        $enum_type:ty, $error_reason:literal,
        { $($variant:ident => $name:literal $(| $alias:literal)*),+ $(,)? }
    ) => {
        impl clap::ValueEnum for $enum_type {
            fn value_variants<'a>() -> &'a [Self] {
                &[$(Self::$variant),+]
            }

            fn to_possible_value(&self) -> Option<clap::builder::PossibleValue> {
                let value = match self {
                    $(Self::$variant => clap::builder::PossibleValue::new($name)$(.alias($alias))*,)+
                };
                Some(value)
            }
        }

        impl std::str::FromStr for $enum_type {
            type Err = $crate::primitives::ConfigError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                <Self as clap::ValueEnum>::from_str(s, true).map_err(|_| {
                    $crate::primitives::ConfigError::ParseError {
                        value: s.to_string(),
                        reason: $error_reason.to_string(),
                    }
                })
            }
        }
    };
}

pub(crate) use cli_value_enum;
