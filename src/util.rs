/*!
Miscellaneous utilities used throughout the crate
*/

/// Quickly implement `Display` using a given function
#[macro_export]
macro_rules! quick_display {
    (impl<$($g:ident),*> $t:ty where [$($b:tt)*], $s:ident, $fmt:ident => $e:expr) => {
        impl<$($g),*> std::fmt::Display for $t where $($b)* {
            fn fmt(&self, fmt: &mut std::fmt::Formatter) -> Result<(), std::fmt::Error> {
                let $s = self;
                let $fmt = fmt;
                $e
            }
        }
    };
    ($t:ty, $s:ident, $fmt:ident => $e:expr) => {
        impl std::fmt::Display for $t {
            fn fmt(&self, fmt: &mut std::fmt::Formatter) -> Result<(), std::fmt::Error> {
                let $s = self;
                let $fmt = fmt;
                $e
            }
        }
    };
}
