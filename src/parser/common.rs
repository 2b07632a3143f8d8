/// Macro to define a thread-local parser with a given language.
/// Usage: `define_parser!(PARSER_NAME, language_fn)`
#[macro_export]
macro_rules! define_parser {
    ($name:ident, $language:expr) => {
        thread_local! {
            static $name: std::cell::RefCell<tree_sitter::Parser> = std::cell::RefCell::new({
                let mut parser = tree_sitter::Parser::new();
                parser.set_language(&$language.into()).expect(concat!("Failed to set ", stringify!($name), " language"));
                parser
            });
        }
    };
}
