//! `#[derive(Fill)]`: feed every value to each field of a struct.
//!
//! ```ignore
//! #[derive(Fill)]
//! #[fill(input = f64)]
//! struct Latencies {
//!     linear: Counting<EqualWidthBins, u64>,
//!     #[fill(map = round_to_millis)]
//!     millis: Counting<IntBins, u64>,
//!     #[fill(skip)]
//!     name: String,
//! }
//! ```

use component::Component;
use field_attributes::FieldAttributes;
use proc_macro::TokenStream;
use syn::{parse_macro_input, DeriveInput};

mod component;
mod field_attributes;
mod symbol;

/// Implements `histofill::fill::Fill<Input>` by calling `put_one` on each
/// field in declaration order.
///
/// * `#[fill(input = Input)]` on the struct is required.
/// * `#[fill(skip)]` leaves a field out.
/// * `#[fill(map = path)]` passes `&path(value)` instead of the value.
#[proc_macro_derive(Fill, attributes(fill))]
pub fn fill_derive(input: TokenStream) -> TokenStream {
    let ast = parse_macro_input!(input as DeriveInput);
    Component::from_ast(&ast)
        .map_or_else(syn::Error::into_compile_error, |component| {
            component.as_token_stream()
        })
        .into()
}
