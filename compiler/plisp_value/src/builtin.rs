//! The primitive operations of the language.
//!
//! `Builtin` only names an operation. What each one does lives in
//! `plisp_eval`, which matches on this enum when a function value is
//! applied.

use std::fmt;

/// A primitive operation. The only kind of function value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Builtin {
    // Arithmetic
    Add,
    Sub,
    Mul,
    Div,
    Mod,

    // Lists
    List,
    Head,
    Tail,
    Init,
    Len,
    Join,

    // Evaluation and definition
    Eval,
    Def,
}

impl Builtin {
    /// Every builtin, in registration order.
    pub const ALL: [Builtin; 13] = [
        Builtin::List,
        Builtin::Head,
        Builtin::Tail,
        Builtin::Init,
        Builtin::Len,
        Builtin::Eval,
        Builtin::Join,
        Builtin::Def,
        Builtin::Add,
        Builtin::Sub,
        Builtin::Mul,
        Builtin::Div,
        Builtin::Mod,
    ];

    /// The symbol this builtin is bound to.
    pub fn name(self) -> &'static str {
        match self {
            Builtin::Add => "+",
            Builtin::Sub => "-",
            Builtin::Mul => "*",
            Builtin::Div => "/",
            Builtin::Mod => "%",
            Builtin::List => "list",
            Builtin::Head => "head",
            Builtin::Tail => "tail",
            Builtin::Init => "init",
            Builtin::Len => "len",
            Builtin::Join => "join",
            Builtin::Eval => "eval",
            Builtin::Def => "def",
        }
    }

    /// Additional spelled-out names, for the arithmetic operators.
    pub fn alias(self) -> Option<&'static str> {
        match self {
            Builtin::Add => Some("add"),
            Builtin::Sub => Some("sub"),
            Builtin::Mul => Some("mul"),
            Builtin::Div => Some("div"),
            Builtin::Mod => Some("mod"),
            _ => None,
        }
    }

    /// Every `(name, builtin)` pair to bind at startup, aliases included.
    pub fn bindings() -> impl Iterator<Item = (&'static str, Builtin)> {
        Self::ALL.into_iter().flat_map(|builtin| {
            std::iter::once((builtin.name(), builtin))
                .chain(builtin.alias().map(|alias| (alias, builtin)))
        })
    }

    /// Look a builtin up by its name or alias.
    pub fn from_name(name: &str) -> Option<Builtin> {
        Self::bindings()
            .find(|(candidate, _)| *candidate == name)
            .map(|(_, builtin)| builtin)
    }
}

impl fmt::Display for Builtin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
