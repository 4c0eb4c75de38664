use crate::Error;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

macro_rules! two_bucket_category {
    (
        $(#[$meta:meta])*
        $name:ident { negative: $negative:ident => $negative_label:tt, non_negative: $non_negative:ident => $non_negative_label:tt }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            #[serde(rename = $negative_label)]
            $negative,
            #[serde(rename = $non_negative_label)]
            $non_negative,
        }

        impl $name {
            pub const ALL: [$name; 2] = [$name::$negative, $name::$non_negative];

            /// Classifies a signed code: negative codes fall into the first bucket.
            pub fn from_code(code: f64) -> Self {
                if code < 0.0 {
                    $name::$negative
                } else {
                    $name::$non_negative
                }
            }

            pub fn as_str(&self) -> &'static str {
                match self {
                    $name::$negative => $negative_label,
                    $name::$non_negative => $non_negative_label,
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                $name::ALL
                    .into_iter()
                    .find(|category| category.as_str() == s)
                    .ok_or_else(|| {
                        Error::UnrecognizedCategory(format!(
                            "{:?} is not a recognized {}",
                            s,
                            stringify!($name).to_lowercase()
                        ))
                    })
            }
        }
    };
}

two_bucket_category!(
    Gender { negative: Female => "Female", non_negative: Male => "Male" }
);

two_bucket_category!(
    Race { negative: NonWhite => "Non-White", non_negative: White => "White" }
);

two_bucket_category!(
    /// Political lean derived from a continuous score.
    Position { negative: Liberal => "Liberal", non_negative: Conservative => "Conservative" }
);
