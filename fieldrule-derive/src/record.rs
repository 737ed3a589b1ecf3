use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::ext::IdentExt;
use syn::{
    Attribute, Data, DeriveInput, Error, Fields, LitStr, Visibility, WherePredicate,
    parse_macro_input, parse_quote,
};

const ATTRIBUTE: &str = "validate";

pub fn derive_validate_impl(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    expand(input)
        .unwrap_or_else(Error::into_compile_error)
        .into()
}

fn expand(input: DeriveInput) -> Result<TokenStream2, Error> {
    let data = match &input.data {
        Data::Struct(data) => data,
        Data::Enum(_) => return Ok(expand_enum(&input)),
        Data::Union(data) => {
            return Err(Error::new_spanned(
                data.union_token,
                "Validate cannot be derived for unions",
            ));
        }
    };

    let fields: Vec<_> = match &data.fields {
        Fields::Named(named) => named.named.iter().collect(),
        Fields::Unit => Vec::new(),
        Fields::Unnamed(unnamed) => {
            return Err(Error::new_spanned(
                unnamed,
                "Validate requires named fields\n\
                 hint: rules are looked up by field name, tuple structs have none",
            ));
        }
    };

    let mut descriptors = Vec::with_capacity(fields.len());
    let mut arms = Vec::new();
    let mut bounds: Vec<WherePredicate> = Vec::new();

    for (index, field) in fields.into_iter().enumerate() {
        let Some(ident) = &field.ident else {
            continue;
        };
        let name = ident.unraw().to_string();
        let rules = rule_string(&field.attrs)?;
        let exported = matches!(field.vis, Visibility::Public(_));

        descriptors.push(quote! {
            ::fieldrule::FieldDescriptor::new(#name, #rules, #exported)
        });

        // values are only produced for fields the walker will actually read
        if exported && !rules.is_empty() {
            let ty = &field.ty;
            arms.push(quote! {
                #index => ::fieldrule::FieldValue::field_value(&self.#ident)
            });
            bounds.push(parse_quote!(#ty: ::fieldrule::FieldValue));
        }
    }

    let name = &input.ident;
    let nested = nested_value(&input, quote!(::fieldrule::Kind::Record));
    let mut generics = input.generics.clone();
    if generics.type_params().next().is_some() {
        generics.make_where_clause().predicates.extend(bounds);
    }
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    Ok(quote! {
        impl #impl_generics ::fieldrule::Record for #name #ty_generics #where_clause {
            fn fields(&self) -> &'static [::fieldrule::FieldDescriptor] {
                const FIELDS: &[::fieldrule::FieldDescriptor] = &[#(#descriptors),*];
                FIELDS
            }

            fn value(&self, index: usize) -> ::fieldrule::Value<'_> {
                match index {
                    #(#arms,)*
                    _ => ::fieldrule::Value::Other(::fieldrule::Kind::Unsupported),
                }
            }
        }

        impl #impl_generics ::fieldrule::Inspect for #name #ty_generics #where_clause {
            fn shape(&self) -> ::fieldrule::Shape<'_> {
                ::fieldrule::Shape::Record(self)
            }
        }

        #nested
    })
}

/// Enums are accepted so they can be handed to `validate`, which rejects them
fn expand_enum(input: &DeriveInput) -> TokenStream2 {
    let name = &input.ident;
    let nested = nested_value(input, quote!(::fieldrule::Kind::Enum));
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    quote! {
        impl #impl_generics ::fieldrule::Inspect for #name #ty_generics #where_clause {
            fn shape(&self) -> ::fieldrule::Shape<'_> {
                ::fieldrule::Shape::Value(::fieldrule::Kind::Enum)
            }
        }

        #nested
    }
}

/// Lets the type sit behind a rule in another record, where it fails every
/// rule since records are not validated recursively
fn nested_value(input: &DeriveInput, kind: TokenStream2) -> TokenStream2 {
    let name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    quote! {
        impl #impl_generics ::fieldrule::FieldValue for #name #ty_generics #where_clause {
            fn field_value(&self) -> ::fieldrule::Value<'_> {
                ::fieldrule::Value::Other(#kind)
            }
        }
    }
}

/// Rule string from `#[validate("...")]`, empty when absent
fn rule_string(attrs: &[Attribute]) -> Result<String, Error> {
    let mut found: Option<LitStr> = None;

    for attr in attrs.iter().filter(|a| a.path().is_ident(ATTRIBUTE)) {
        let rules: LitStr = attr.parse_args().map_err(|e| {
            Error::new(
                e.span(),
                "expected a rule string, e.g. #[validate(\"min:1&max:10\")]",
            )
        })?;

        if found.is_some() {
            return Err(Error::new_spanned(
                attr,
                "duplicate #[validate] attribute\n\
                 hint: join clauses with `&` in a single attribute",
            ));
        }
        found = Some(rules);
    }

    Ok(found.map(|lit| lit.value()).unwrap_or_default())
}
