//! Implementation of the `#[derive(RawEnum)]` macro.

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::ext::IdentExt;
use syn::{Data, DataEnum, DeriveInput, Fields, Ident, LitStr, parse_macro_input};

/// Main implementation of the `RawEnum` derive macro.
pub fn derive_raw_enum_impl(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    TokenStream::from(expand(&input).unwrap_or_else(syn::Error::into_compile_error))
}

fn expand(input: &DeriveInput) -> syn::Result<TokenStream2> {
    let name = &input.ident;

    let data_enum = match &input.data {
        Data::Enum(data_enum) => data_enum,
        Data::Struct(_) => {
            return Err(syn::Error::new_spanned(
                name,
                "RawEnum can only be derived for enums, not structs.",
            ));
        }
        Data::Union(_) => {
            return Err(syn::Error::new_spanned(
                name,
                "RawEnum cannot be derived for unions.",
            ));
        }
    };

    if !input.generics.params.is_empty() {
        return Err(syn::Error::new_spanned(
            &input.generics,
            "RawEnum cannot be derived for generic enums.",
        ));
    }

    let variants = unit_variants(name, data_enum)?;
    Ok(generate_impl(name, &variants))
}

/// Collects the variant identifiers, rejecting empty enums and variants with fields.
fn unit_variants<'a>(name: &Ident, data_enum: &'a DataEnum) -> syn::Result<Vec<&'a Ident>> {
    if data_enum.variants.is_empty() {
        return Err(syn::Error::new_spanned(
            name,
            "RawEnum requires at least one variant.",
        ));
    }

    data_enum
        .variants
        .iter()
        .map(|variant| match variant.fields {
            Fields::Unit => Ok(&variant.ident),
            Fields::Named(_) | Fields::Unnamed(_) => Err(syn::Error::new_spanned(
                variant,
                "RawEnum variants must not carry fields.",
            )),
        })
        .collect()
}

/// Canonical name of an identifier, without any `r#` prefix.
fn display_name(ident: &Ident) -> LitStr {
    LitStr::new(&ident.unraw().to_string(), ident.span())
}

fn generate_impl(name: &Ident, variants: &[&Ident]) -> TokenStream2 {
    let type_name = display_name(name);
    let names = variants.iter().map(|variant| display_name(variant));

    quote! {
        #[automatically_derived]
        impl ::bounded_enum::RawEnum for #name {
            const VARIANTS: &'static [Self] = &[#(Self::#variants),*];

            #[inline]
            fn name(self) -> &'static str {
                match self {
                    #(Self::#variants => #names,)*
                }
            }

            #[inline]
            #[allow(clippy::cast_lossless, clippy::cast_possible_wrap)]
            fn discriminant(self) -> i64 {
                self as i64
            }

            #[inline]
            fn type_name() -> &'static str {
                #type_name
            }

            fn check_domain() -> ::core::result::Result<(), ::bounded_enum::DomainSetupError> {
                static CHECKED: ::std::sync::OnceLock<
                    ::core::result::Result<(), ::bounded_enum::DomainSetupError>,
                > = ::std::sync::OnceLock::new();
                CHECKED
                    .get_or_init(::bounded_enum::check_domain::<#name>)
                    .clone()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use syn::parse_quote;

    fn expect_error(input: &DeriveInput) -> String {
        match expand(input) {
            Ok(tokens) => panic!("expected an error, got {tokens}"),
            Err(error) => error.to_string(),
        }
    }

    #[rstest]
    fn unit_enum_expands() {
        let input: DeriveInput = parse_quote! {
            enum Size { Unknown, Small = 2, Large }
        };
        let expanded = expand(&input).unwrap().to_string();

        assert!(expanded.contains("impl :: bounded_enum :: RawEnum for Size"));
        assert!(expanded.contains("Self :: Small => \"Small\""));
        assert!(expanded.contains("\"Size\""));
        assert!(expanded.contains("check_domain :: < Size >"));
    }

    #[rstest]
    fn raw_identifiers_lose_their_prefix() {
        let ident: Ident = parse_quote!(r#type);
        assert_eq!(display_name(&ident).value(), "type");
    }

    #[rstest]
    #[case(parse_quote! { struct Point { x: i32 } }, "not structs")]
    #[case(parse_quote! { union Bits { a: u32, b: f32 } }, "unions")]
    #[case(parse_quote! { enum Wrapper<T> { Value } }, "generic")]
    #[case(parse_quote! { enum Never {} }, "at least one variant")]
    #[case(parse_quote! { enum Shape { Circle(f64), Point } }, "must not carry fields")]
    #[case(parse_quote! { enum Event { Click { x: i32 } } }, "must not carry fields")]
    fn unsupported_inputs_are_rejected(#[case] input: DeriveInput, #[case] message: &str) {
        assert!(expect_error(&input).contains(message));
    }
}
