use proc_macro::TokenStream;
use quote::{format_ident, quote};
use syn::{
    Data, DeriveInput, Fields, GenericArgument, PathArguments, Type, parse_macro_input,
    spanned::Spanned,
};

fn to_snake_case(name: &str) -> String {
    let mut out = String::new();
    for (i, c) in name.chars().enumerate() {
        if c.is_uppercase() {
            if i != 0 {
                out.push('_');
            }
            out.push(c.to_ascii_lowercase());
        } else {
            out.push(c);
        }
    }
    out
}

/// If `ty` is `Box<T>` (by any path spelling ending in `Box`), return `T`.
fn boxed_inner(ty: &Type) -> Option<Type> {
    if let Type::Path(tp) = ty {
        let seg = tp.path.segments.last()?;
        if seg.ident == "Box" {
            if let PathArguments::AngleBracketed(ab) = &seg.arguments {
                if let Some(GenericArgument::Type(inner)) = ab.args.first() {
                    return Some(inner.clone());
                }
            }
        }
    }
    None
}

fn reject_generics(input: &DeriveInput) -> Option<TokenStream> {
    if input.generics.params.is_empty() {
        None
    } else {
        Some(
            syn::Error::new(
                input.generics.span(),
                "generic enums are not supported; write case paths for them by hand",
            )
            .to_compile_error()
            .into(),
        )
    }
}

/// Variant pattern that ignores any payload: `E::A`, `E::B(..)`, `E::C { .. }`.
fn wildcard_pattern(
    name: &proc_macro2::Ident,
    variant: &syn::Variant,
) -> proc_macro2::TokenStream {
    let v_ident = &variant.ident;
    match &variant.fields {
        Fields::Unit => quote! { #name::#v_ident },
        Fields::Unnamed(_) => quote! { #name::#v_ident(..) },
        Fields::Named(_) => quote! { #name::#v_ident { .. } },
    }
}

/// Derives case-path accessor methods for enum variants.
///
/// For each variant `VariantName`, generates an associated function
/// `variant_name_case()` returning a
/// `rust_case_paths::CasePath<Enum, Payload>` whose embed calls the variant's
/// constructor and whose extract pattern-matches exactly that variant:
///
/// - unit variant `A` - `a_case() -> CasePath<Enum, ()>`
/// - single-field variant `B(T)` - `b_case() -> CasePath<Enum, T>`
/// - boxed variant `C(Box<T>)` - `c_case() -> CasePath<Enum, T>` (embed
///   boxes, extract unwraps one level)
/// - multi-field and struct variants - payload is a tuple of the fields
///
/// Also generates:
///
/// - `case_paths() -> Vec<PartialCasePath<Enum>>` - one type-erased accessor
///   per variant, in declaration order
/// - `case_path(&self) -> PartialCasePath<Enum>` - the accessor that would
///   have produced `self`
///
/// Payload types must be `Clone`; the generated extract clones the payload
/// out of the matched variant.
///
/// # Examples
///
/// ```rust,ignore
/// use casepaths_proc::Casepaths;
///
/// #[derive(Debug, Clone, Casepaths)]
/// enum Status {
///     Active(String),
///     Inactive,
/// }
///
/// let active = Status::active_case();
/// assert_eq!(active.extract(&Status::Active("on".into())), Some("on".to_string()));
/// assert_eq!(active.extract(&Status::Inactive), None);
/// assert_eq!(Status::Inactive.case_path().name(), "Inactive");
/// ```
#[proc_macro_derive(Casepaths)]
pub fn derive_casepaths(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    if let Some(err) = reject_generics(&input) {
        return err;
    }
    let name = input.ident;
    let name_str = name.to_string();

    let data_enum = match input.data {
        Data::Enum(data_enum) => data_enum,
        _ => {
            return quote! { compile_error!("Casepaths can only be derived for enums"); }.into();
        }
    };

    let mut accessors = proc_macro2::TokenStream::new();
    let mut case_fns = Vec::new();
    let mut patterns = Vec::new();

    for variant in data_enum.variants.iter() {
        let v_ident = &variant.ident;
        let v_str = v_ident.to_string();
        let snake = format_ident!("{}", to_snake_case(&v_str));
        let case_fn = format_ident!("{}_case", snake);

        let accessor = match &variant.fields {
            Fields::Unit => quote! {
                pub fn #case_fn() -> rust_case_paths::CasePath<#name, ()> {
                    rust_case_paths::CasePath::new(
                        |_unit: ()| #name::#v_ident,
                        |root: &#name| match root { #name::#v_ident => Some(()), _ => None },
                    )
                    .with_path(&[#name_str, #v_str])
                }
            },
            Fields::Unnamed(unnamed) if unnamed.unnamed.len() == 1 => {
                let inner_ty = &unnamed.unnamed.first().unwrap().ty;
                if let Some(elem) = boxed_inner(inner_ty) {
                    quote! {
                        pub fn #case_fn() -> rust_case_paths::CasePath<#name, #elem> {
                            rust_case_paths::CasePath::new(
                                |value: #elem| #name::#v_ident(Box::new(value)),
                                |root: &#name| match root {
                                    #name::#v_ident(boxed) => Some((**boxed).clone()),
                                    _ => None,
                                },
                            )
                            .with_path(&[#name_str, #v_str])
                        }
                    }
                } else {
                    quote! {
                        pub fn #case_fn() -> rust_case_paths::CasePath<#name, #inner_ty> {
                            rust_case_paths::CasePath::new(
                                #name::#v_ident,
                                |root: &#name| match root {
                                    #name::#v_ident(value) => Some(value.clone()),
                                    _ => None,
                                },
                            )
                            .with_path(&[#name_str, #v_str])
                        }
                    }
                }
            }
            Fields::Unnamed(unnamed) => {
                let field_types: Vec<_> = unnamed.unnamed.iter().map(|f| &f.ty).collect();
                let field_patterns: Vec<_> = (0..unnamed.unnamed.len())
                    .map(|i| format_ident!("f{}", i))
                    .collect();
                quote! {
                    pub fn #case_fn() -> rust_case_paths::CasePath<#name, (#(#field_types),*)> {
                        rust_case_paths::CasePath::new(
                            |(#(#field_patterns),*): (#(#field_types),*)| #name::#v_ident(#(#field_patterns),*),
                            |root: &#name| match root {
                                #name::#v_ident(#(#field_patterns),*) => Some((#(#field_patterns.clone()),*)),
                                _ => None,
                            },
                        )
                        .with_path(&[#name_str, #v_str])
                    }
                }
            }
            Fields::Named(named) if named.named.len() == 1 => {
                let field = named.named.first().unwrap();
                let f_ident = field.ident.as_ref().unwrap();
                let f_ty = &field.ty;
                quote! {
                    pub fn #case_fn() -> rust_case_paths::CasePath<#name, #f_ty> {
                        rust_case_paths::CasePath::new(
                            |value: #f_ty| #name::#v_ident { #f_ident: value },
                            |root: &#name| match root {
                                #name::#v_ident { #f_ident } => Some(#f_ident.clone()),
                                _ => None,
                            },
                        )
                        .with_path(&[#name_str, #v_str])
                    }
                }
            }
            Fields::Named(named) => {
                let field_names: Vec<_> =
                    named.named.iter().map(|f| f.ident.as_ref().unwrap()).collect();
                let field_types: Vec<_> = named.named.iter().map(|f| &f.ty).collect();
                quote! {
                    pub fn #case_fn() -> rust_case_paths::CasePath<#name, (#(#field_types),*)> {
                        rust_case_paths::CasePath::new(
                            |(#(#field_names),*): (#(#field_types),*)| #name::#v_ident { #(#field_names),* },
                            |root: &#name| match root {
                                #name::#v_ident { #(#field_names),* } => Some((#(#field_names.clone()),*)),
                                _ => None,
                            },
                        )
                        .with_path(&[#name_str, #v_str])
                    }
                }
            }
        };

        accessors.extend(accessor);
        case_fns.push(case_fn);
        patterns.push(wildcard_pattern(&name, variant));
    }

    let expanded = quote! {
        impl #name {
            #accessors

            pub fn case_paths() -> Vec<rust_case_paths::PartialCasePath<#name>> {
                vec![
                    #( rust_case_paths::PartialCasePath::new(#name::#case_fns()) ),*
                ]
            }

            pub fn case_path(&self) -> rust_case_paths::PartialCasePath<#name> {
                match self {
                    #( #patterns => rust_case_paths::PartialCasePath::new(#name::#case_fns()) ),*
                }
            }
        }
    };

    TokenStream::from(expanded)
}

/// Derives the `rust_case_paths::Cases` trait for an enum.
///
/// The impl reports the variant count, the active variant's tag label, and a
/// borrow of the active variant's payload slot. This is what
/// `CasePath::case` consumes to synthesize extraction from a constructor
/// alone.
///
/// A `Box`ed single payload is unwrapped one level, so descent through a
/// recursive variant like `Expr::Paren(Box<Expr>)` sees the inner value.
/// Variants with more than one field have no single payload slot and report
/// `None`; use `#[derive(Casepaths)]` accessors for those.
///
/// # Examples
///
/// ```rust,ignore
/// use casepaths_proc::Cases;
/// use rust_case_paths::CasePath;
///
/// #[derive(Debug, Clone, PartialEq, Cases)]
/// enum Token {
///     Word(String),
///     Comma,
/// }
///
/// let word: CasePath<Token, String> = CasePath::case(Token::Word);
/// assert_eq!(word.extract(&Token::Word("let".into())), Some("let".to_string()));
/// ```
#[proc_macro_derive(Cases)]
pub fn derive_cases(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    if let Some(err) = reject_generics(&input) {
        return err;
    }
    let name = input.ident;

    let data_enum = match input.data {
        Data::Enum(data_enum) => data_enum,
        _ => {
            return quote! { compile_error!("Cases can only be derived for enums"); }.into();
        }
    };

    let count = data_enum.variants.len();
    let mut name_arms = Vec::new();
    let mut payload_arms = Vec::new();

    for variant in data_enum.variants.iter() {
        let v_ident = &variant.ident;
        let v_str = v_ident.to_string();
        let pattern = wildcard_pattern(&name, variant);
        name_arms.push(quote! { #pattern => #v_str });

        let payload_arm = match &variant.fields {
            Fields::Unit => quote! { #name::#v_ident => None },
            Fields::Unnamed(unnamed) if unnamed.unnamed.len() == 1 => {
                let inner_ty = &unnamed.unnamed.first().unwrap().ty;
                if boxed_inner(inner_ty).is_some() {
                    quote! { #name::#v_ident(boxed) => Some(&**boxed as &dyn ::std::any::Any) }
                } else {
                    quote! { #name::#v_ident(value) => Some(value as &dyn ::std::any::Any) }
                }
            }
            Fields::Unnamed(_) => quote! { #name::#v_ident(..) => None },
            Fields::Named(named) if named.named.len() == 1 => {
                let f_ident = named.named.first().unwrap().ident.as_ref().unwrap();
                quote! { #name::#v_ident { #f_ident } => Some(#f_ident as &dyn ::std::any::Any) }
            }
            Fields::Named(_) => quote! { #name::#v_ident { .. } => None },
        };
        payload_arms.push(payload_arm);
    }

    let expanded = quote! {
        impl rust_case_paths::Cases for #name {
            const CASES: usize = #count;

            fn case_name(&self) -> &'static str {
                match self {
                    #( #name_arms ),*
                }
            }

            fn payload(&self) -> Option<&dyn ::std::any::Any> {
                match self {
                    #( #payload_arms ),*
                }
            }
        }
    };

    TokenStream::from(expanded)
}
