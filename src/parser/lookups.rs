use std::collections::HashMap;

/// Sentinel returned for symbols with no binary operator entry. Lower
/// than any registrable precedence.
pub const NOT_AN_OPERATOR: i32 = -1;

/// Precedence recorded for `binary` declarations without an explicit
/// precedence literal.
pub const DEFAULT_PRECEDENCE: i32 = 30;

/// Binding powers for binary operators; higher binds tighter.
///
/// Seeded with the built-in tiers and mutated destructively when the
/// parser processes a `binary` operator declaration. The table belongs
/// to the parsing session and is never reset between `parse_item`
/// calls, which is what lets a multi-statement session use operators
/// declared by earlier statements.
#[derive(Debug, Clone)]
pub struct OpTable {
    precedence: HashMap<String, i32>,
}

impl OpTable {
    pub fn new() -> Self {
        let mut precedence = HashMap::new();
        precedence.insert(String::from("="), 2);
        precedence.insert(String::from("<"), 10);
        precedence.insert(String::from("+"), 20);
        precedence.insert(String::from("-"), 20);
        precedence.insert(String::from("*"), 30);

        OpTable { precedence }
    }

    /// The binding power of a symbol, or `NOT_AN_OPERATOR` if it has no
    /// binary entry.
    pub fn lookup(&self, op: &str) -> i32 {
        *self.precedence.get(op).unwrap_or(&NOT_AN_OPERATOR)
    }

    /// Registers or overwrites a symbol's binding power, effective
    /// immediately for every following expression parse.
    pub fn register(&mut self, op: &str, precedence: i32) {
        self.precedence.insert(String::from(op), precedence);
    }
}

impl Default for OpTable {
    fn default() -> Self {
        OpTable::new()
    }
}
