//! Macros for declaring closed sets of field types.
//!
//! # Available Macros
//!
//! - [`field_types!`] — Declare an enum together with its identifier table
//!
//! # Examples
//!
//! ```rust,ignore
//! field_types! {
//!     /// Kinds of identifiers.
//!     pub enum IdKind {
//!         Upc => "UPC",
//!         Ean13 => "EAN_13",
//!     }
//! }
//!
//! assert_eq!(IdKind::Ean13.as_str(), "EAN_13");
//! assert_eq!(IdKind::from_name("UPC"), Some(IdKind::Upc));
//! assert_eq!(IdKind::NAMES, &["UPC", "EAN_13"]);
//! ```

// ============================================================================
// FIELD TYPES MACRO
// ============================================================================

/// Declares a field type enum, its ordered variant list, and its external
/// identifiers from a single declaration.
///
/// Generated items:
///
/// - the enum itself, with `Debug, Clone, Copy, PartialEq, Eq, Hash,
///   PartialOrd, Ord` always derived
/// - `ALL` — every variant in declaration order (index == discriminant)
/// - `NAMES` — the external identifier of every variant, same order
/// - `COUNT`
/// - `as_str()`, `index()` and `from_name()`
///
/// Variants must not carry explicit discriminants; `index()` relies on the
/// declaration order.
#[macro_export]
macro_rules! field_types {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$vmeta:meta])*
                $variant:ident => $ident:literal
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        $vis enum $name {
            $(
                $(#[$vmeta])*
                $variant,
            )+
        }

        impl $name {
            /// Every variant, in declaration order.
            pub const ALL: &'static [Self] = &[$(Self::$variant),+];

            /// External identifier of every variant, in declaration order.
            pub const NAMES: &'static [&'static str] = &[$($ident),+];

            /// Number of variants.
            pub const COUNT: usize = Self::ALL.len();

            /// Returns the external identifier.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $ident,)+
                }
            }

            /// Returns the position of this variant in [`Self::ALL`].
            #[must_use]
            pub const fn index(self) -> usize {
                self as usize
            }

            /// Looks a variant up by its external identifier (exact match).
            #[must_use]
            pub fn from_name(name: &str) -> Option<Self> {
                match name {
                    $($ident => Some(Self::$variant),)+
                    _ => None,
                }
            }
        }
    };
}
