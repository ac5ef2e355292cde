use proc_macro::TokenStream;
use quote::{quote, ToTokens};
use syn::{parenthesized, Attribute, Data, DeriveInput, Visibility};

// read option parsed from `#[r(...)]`
#[derive(Clone)]
struct ReadOption {
    vis: Visibility,
    copy: bool,
    skip: bool,
}

fn parse_read_option(
    attrs: &[Attribute],
    default_vis: &Visibility,
) -> syn::Result<Option<ReadOption>> {
    let Some(attr) = attrs.iter().find(|attr| attr.path().is_ident("r")) else {
        return Ok(None);
    };

    let mut option = ReadOption {
        vis: default_vis.clone(),
        copy: false,
        skip: false,
    };

    if matches!(attr.meta, syn::Meta::Path(_)) {
        return Ok(Some(option));
    }

    attr.parse_nested_meta(|meta| {
        if meta.path.is_ident("vis") {
            let content;
            parenthesized!(content in meta.input);
            option.vis = content.parse::<Visibility>()?;
        } else if meta.path.is_ident("copy") {
            option.copy = true;
        } else if meta.path.is_ident("skip") {
            option.skip = true;
        } else {
            return Err(meta.error("expect one of `vis(..)`, `copy`, `skip`"));
        }
        Ok(())
    })?;

    Ok(Some(option))
}

pub fn macro_fields(input: DeriveInput) -> TokenStream {
    let ident = input.ident;
    let generics = input.generics;
    let input_vis = input.vis;

    let Data::Struct(data) = input.data else {
        return syn::Error::new(ident.span(), "Fields can only be applied to structs")
            .into_compile_error()
            .into();
    };

    let global_option = match parse_read_option(&input.attrs, &input_vis) {
        Ok(option) => option,
        Err(err) => return err.into_compile_error().into(),
    };

    // these are returned by value, everything else by reference
    const PRIMITIVE_TYPES: [&str; 15] = [
        "bool", "u8", "u16", "u32", "u64", "u128", "usize", "i8", "i16", "i32", "i64", "i128",
        "f32", "f64", "FloatNum",
    ];

    let mut methods = Vec::with_capacity(data.fields.len());

    for field in data.fields.iter() {
        let Some(field_ident) = field.ident.clone() else {
            return syn::Error::new(ident.span(), "Fields can only be applied to named fields")
                .into_compile_error()
                .into();
        };

        let option = match parse_read_option(&field.attrs, &input_vis) {
            Ok(option) => option.or_else(|| global_option.clone()),
            Err(err) => return err.into_compile_error().into(),
        };

        let Some(ReadOption { vis, copy, skip }) = option else {
            continue;
        };

        if skip {
            continue;
        }

        let ty = &field.ty;

        let is_primitive = match ty {
            syn::Type::Path(path) => {
                let t = path.into_token_stream().to_string();
                PRIMITIVE_TYPES.iter().any(|primitive| *primitive == t)
            }
            _ => false,
        };

        let method = if copy || is_primitive {
            quote!(
                #[inline]
                #vis fn #field_ident(&self) -> #ty {
                    self.#field_ident
                }
            )
        } else {
            quote!(
                #[inline]
                #vis fn #field_ident(&self) -> &#ty {
                    &self.#field_ident
                }
            )
        };

        methods.push(method);
    }

    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    quote!(
        impl #impl_generics #ident #ty_generics #where_clause {
            #(#methods)*
        }
    )
    .into()
}
