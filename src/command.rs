//! Command dispatch for interfaces
//!
//! Every interface carries a [`CommandTable`] mapping command names to
//! handlers. Handlers share one calling convention: positional arguments
//! as a slice of JSON values in, a single JSON value out. Handlers with
//! different arities all fit behind the same [`CommandHandler`] trait.

use serde_json::Value;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// Handler invoked when a command is executed on an interface
///
/// Implemented for any `Fn(&[Value]) -> Value` closure, so most callers
/// never implement it by hand.
pub trait CommandHandler: Send + Sync {
    /// Run the command with the given positional arguments
    fn call(&self, args: &[Value]) -> Value;
}

impl<F> CommandHandler for F
where
    F: Fn(&[Value]) -> Value + Send + Sync,
{
    fn call(&self, args: &[Value]) -> Value {
        self(args)
    }
}

/// Named command handlers for a single interface
#[derive(Clone, Default)]
pub struct CommandTable {
    handlers: HashMap<String, Arc<dyn CommandHandler>>,
}

impl CommandTable {
    /// Create an empty command table
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace the handler for `name`
    /// Returns true if an existing handler was replaced
    pub fn register<H>(&mut self, name: impl Into<String>, handler: H) -> bool
    where
        H: CommandHandler + 'static,
    {
        self.handlers
            .insert(name.into(), Arc::new(handler))
            .is_some()
    }

    /// Execute the handler registered for `name`
    /// Returns None when no handler is registered under that name
    pub fn execute(&self, name: &str, args: &[Value]) -> Option<Value> {
        self.handlers.get(name).map(|handler| handler.call(args))
    }

    /// Check whether a handler is registered for `name`
    pub fn contains(&self, name: &str) -> bool {
        self.handlers.contains_key(name)
    }

    /// Registered command names, sorted alphabetically
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.handlers.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Number of registered commands
    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    /// Whether the table has no commands
    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}

impl fmt::Debug for CommandTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.names()).finish()
    }
}

/// Typed access to positional command arguments
///
/// Missing or mistyped arguments come back as `None`, letting handlers
/// decide on their own fallback instead of panicking.
pub trait CommandArgs {
    /// Argument at `index` as a signed integer
    fn int(&self, index: usize) -> Option<i64>;
    /// Argument at `index` as a float (integers are widened)
    fn float(&self, index: usize) -> Option<f64>;
    /// Argument at `index` as a string slice
    fn str(&self, index: usize) -> Option<&str>;
}

impl CommandArgs for [Value] {
    fn int(&self, index: usize) -> Option<i64> {
        self.get(index).and_then(Value::as_i64)
    }

    fn float(&self, index: usize) -> Option<f64> {
        self.get(index).and_then(Value::as_f64)
    }

    fn str(&self, index: usize) -> Option<&str> {
        self.get(index).and_then(Value::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn add(args: &[Value]) -> Value {
        match (args.int(0), args.int(1)) {
            (Some(x), Some(y)) => json!(x + y),
            _ => Value::Null,
        }
    }

    #[test]
    fn test_execute_registered_command() {
        let mut table = CommandTable::new();
        table.register("add", add);

        assert_eq!(table.execute("add", &[json!(3), json!(7)]), Some(json!(10)));
    }

    #[test]
    fn test_execute_unknown_command() {
        let table = CommandTable::new();
        assert_eq!(table.execute("nonexistent", &[]), None);
    }

    #[test]
    fn test_register_overwrites() {
        let mut table = CommandTable::new();
        assert!(!table.register("greet", |_: &[Value]| json!("hello")));
        assert!(table.register("greet", |_: &[Value]| json!("hi")));

        assert_eq!(table.len(), 1);
        assert_eq!(table.execute("greet", &[]), Some(json!("hi")));
    }

    #[test]
    fn test_handlers_with_different_arities() {
        let mut table = CommandTable::new();
        table.register("double", |args: &[Value]| {
            args.int(0).map(|x| json!(x * 2)).unwrap_or(Value::Null)
        });
        table.register("add", add);
        table.register("ping", |_: &[Value]| json!("pong"));

        assert_eq!(table.execute("double", &[json!(5)]), Some(json!(10)));
        assert_eq!(table.execute("ping", &[]), Some(json!("pong")));
        assert_eq!(table.names(), vec!["add", "double", "ping"]);
    }

    #[test]
    fn test_mistyped_arguments_fall_back() {
        let mut table = CommandTable::new();
        table.register("add", add);

        assert_eq!(
            table.execute("add", &[json!("three"), json!(7)]),
            Some(Value::Null)
        );
    }

    #[test]
    fn test_argument_accessors() {
        let args = vec![json!(4), json!(2.5), json!("text")];
        assert_eq!(args.int(0), Some(4));
        assert_eq!(args.float(0), Some(4.0));
        assert_eq!(args.float(1), Some(2.5));
        assert_eq!(args.str(2), Some("text"));
        assert_eq!(args.str(3), None);
        assert_eq!(args.int(2), None);
    }
}
