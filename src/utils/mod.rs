pub mod carousel;
pub mod dates;
pub mod dom;
pub mod panic_hook;
