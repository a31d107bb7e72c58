pub use console::ConsoleMatcher;

mod console;
