//! Config derive macro - generates FIELDS.

mod attr;
mod field;
mod types;

use proc_macro2::TokenStream;
use quote::quote;
use syn::{Data, DeriveInput, Fields};

use attr::{get_section, get_serde_rename_all};
use field::FieldInfo;

/// Generate Config implementation.
pub fn derive(input: &DeriveInput) -> TokenStream {
    let name = &input.ident;
    let fields_struct_name = syn::Ident::new(&format!("{}Fields", name), name.span());

    // Records that only live inside arrays have no static prefix.
    let section = get_section(&input.attrs).unwrap_or_default();

    let rename_all = get_serde_rename_all(&input.attrs);

    let fields = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(fields) => &fields.named,
            _ => {
                return quote! { compile_error!("Config only works on structs with named fields"); }
            }
        },
        _ => return quote! { compile_error!("Config only works on structs"); },
    };

    let field_infos: Vec<FieldInfo> = fields
        .iter()
        .filter_map(|f| FieldInfo::from_field(f, rename_all.as_deref()))
        .collect();

    let field_defs = field_infos.iter().map(|f| {
        let name = &f.name;
        quote! { pub #name: crate::config::FieldPath, }
    });

    let field_inits = field_infos.iter().map(|f| {
        let name = &f.name;
        let full_path = if section.is_empty() {
            f.wire_name.clone()
        } else {
            format!("{}.{}", section, f.wire_name)
        };
        quote! { #name: crate::config::FieldPath::new(#full_path), }
    });

    quote! {
        /// Generated field path accessors.
        #[allow(non_camel_case_types, dead_code)]
        pub struct #fields_struct_name {
            #(#field_defs)*
        }

        impl #name {
            /// Field paths for diagnostic messages.
            pub const FIELDS: #fields_struct_name = #fields_struct_name {
                #(#field_inits)*
            };
        }
    }
}
