use proc_macro::TokenStream;
use quote::quote;
use syn::{Data, DeriveInput, Index, Member};

pub fn macro_deref(input: DeriveInput) -> TokenStream {
    let ident = input.ident;
    let generics = input.generics;
    let Data::Struct(data) = input.data else {
        return syn::Error::new(ident.span(), "Deref can only be applied to structs")
            .into_compile_error()
            .into();
    };

    let mut deref_fields = data
        .fields
        .iter()
        .enumerate()
        .filter(|(_, field)| field.attrs.iter().any(|attr| attr.path().is_ident("deref")))
        .map(|(index, field)| {
            let member = match &field.ident {
                Some(field_ident) => Member::Named(field_ident.clone()),
                None => Member::Unnamed(Index::from(index)),
            };
            (member, field.ty.clone())
        });

    let Some((deref_member, deref_field_ty)) = deref_fields.next() else {
        return syn::Error::new(
            ident.span(),
            "must set one deref field when use Deref macro",
        )
        .into_compile_error()
        .into();
    };

    if deref_fields.next().is_some() {
        return syn::Error::new(ident.span(), "only one field can be marked with #[deref]")
            .into_compile_error()
            .into();
    }

    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    quote!(
        impl #impl_generics core::ops::Deref for #ident #ty_generics #where_clause {
            type Target = #deref_field_ty;
            fn deref(&self) -> &Self::Target {
                &self.#deref_member
            }
        }
    )
    .into()
}
