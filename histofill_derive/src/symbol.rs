use syn::Path;

/// The attribute namespace, `#[fill(...)]`
pub const FILL: Symbol = Symbol("fill");
/// Container key naming the input type
pub const INPUT: Symbol = Symbol("input");
/// Field key naming a conversion function
pub const MAP: Symbol = Symbol("map");
/// Field flag excluding the field
pub const SKIP: Symbol = Symbol("skip");

/// A word in `#[fill(...)]`, matched against single-segment paths.
#[derive(Copy, Clone)]
pub struct Symbol(&'static str);

impl PartialEq<Symbol> for Path {
    fn eq(&self, word: &Symbol) -> bool {
        self.is_ident(word.0)
    }
}

impl PartialEq<Symbol> for &Path {
    fn eq(&self, word: &Symbol) -> bool {
        self.is_ident(word.0)
    }
}
