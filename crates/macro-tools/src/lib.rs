use proc_macro::TokenStream;
use syn::{parse_macro_input, DeriveInput};

mod builder;
mod deref;
mod fields;

/// forward `Deref` to the field marked with `#[deref]`
#[proc_macro_derive(Deref, attributes(deref))]
pub fn deref(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    deref::macro_deref(input)
}

/// generate `XBuilder` with chained setters, defaults come from `#[default = expr]`
#[proc_macro_derive(Builder, attributes(default, builder))]
pub fn builder(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    builder::macro_builder(input)
}

/// generate read accessors, `#[r]` on the struct applies to every field
#[proc_macro_derive(Fields, attributes(r))]
pub fn fields(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    fields::macro_fields(input)
}
