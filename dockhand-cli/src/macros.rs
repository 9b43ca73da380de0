/// Renders a catalog template, filling `{name}`-style placeholders.
///
/// ```
/// use dockhand_cli::msg;
///
/// let line = msg!("Starting '{name}'...", name = "api");
/// assert_eq!(line, "Starting 'api'...");
/// ```
#[macro_export]
macro_rules! msg {
    ($template:expr $(, $key:ident = $value:expr)* $(,)?) => {
        $crate::builder::MessageBuilder::new($template)
            $(.var(stringify!($key), $value))*
            .build()
    };
}
