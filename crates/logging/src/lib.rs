use colored::Colorize;
use lazy_static::lazy_static;

#[macro_export]
macro_rules! log {
    ($scope: expr, $fmt_string:expr $(, $arg:expr )*) => {
        println!("[{}] {}", $scope, format!($fmt_string, $( $arg ),*));
    };
}

#[rustfmt::skip]
lazy_static! {
    pub static ref LOG_MODEL   : String = "MODEL   ".green() .to_string();
    pub static ref LOG_SELFTEST: String = "SELFTEST".yellow().to_string();
    pub static ref LOG_HARNESS : String = "HARNESS ".blue()  .to_string();
}
