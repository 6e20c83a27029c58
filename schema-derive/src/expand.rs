use proc_macro2::TokenStream;
use std::collections::HashMap;
use std::str::FromStr;
use itertools::Itertools;
use syn::{Error, Ident, Result};
use quote::{format_ident, quote};
use ebml_splice_schema::ElementType;

use crate::ast::{SchemaEntry, SchemaInput};
use crate::pathing::PathPart;

enum Placement {
    Root,
    Global,
    Child(Ident),
}

struct Resolved<'a> {
    entry: &'a SchemaEntry,
    ident: &'a Ident,
    name: String,
    element_type: ElementType,
    id: u64,
    placement: Placement,
    mandatory: bool,
    multiple: bool,
}

impl<'a> Resolved<'a> {
    fn from_entry(entry: &'a SchemaEntry) -> Result<Self> {
        let ident = entry.path.element().ok_or_else(|| Error::new(entry.path.span, "last path segment must name the element"))?;

        let placement = if entry.path.len() == 1 {
            Placement::Root
        } else if entry.path.is_global() {
            Placement::Global
        } else {
            let mut parent = None;
            for part in entry.path.ancestors() {
                match part {
                    PathPart::Ident(id) => parent = Some(id.clone()),
                    PathPart::Global => return Err(Error::new_spanned(part, "global marker `(-)` is only allowed as `(-)/Name`")),
                }
            }
            Placement::Child(parent.ok_or_else(|| Error::new(entry.path.span, "element path is empty"))?)
        };

        let element_type = ElementType::from_str(&entry.ty.to_string()).map_err(|e| Error::new_spanned(&entry.ty, e.to_string()))?;

        let id = entry.id.base10_parse::<u64>()?;
        if id == 0 || id > 0xFFFF_FFFF {
            return Err(Error::new_spanned(&entry.id, "element ids must be between 1 and 4 bytes long"));
        }

        let mut mandatory = false;
        let mut multiple = false;
        for flag in &entry.flags {
            if flag == "mandatory" {
                mandatory = true;
            } else if flag == "multiple" {
                multiple = true;
            } else {
                return Err(Error::new_spanned(flag, format!("unknown flag \"{}\", expected `mandatory` or `multiple`", flag)));
            }
        }

        let name = match &entry.rename {
            Some(lit) => lit.value(),
            None => ident.to_string(),
        };

        Ok(Resolved {
            entry,
            ident,
            name,
            element_type,
            id,
            placement,
            mandatory,
            multiple,
        })
    }

    fn written_path(&self) -> String {
        self.entry.path.parts.iter().join("/")
    }

    fn written_parent_path(&self) -> String {
        self.entry.path.ancestors().join("/")
    }
}

pub fn impl_ebml_schema(input: &SchemaInput) -> Result<TokenStream> {
    let resolved: Vec<Resolved> = input.entries.iter().map(Resolved::from_entry).collect::<Result<_>>()?;

    let mut used_ids = HashMap::<u64, &Resolved>::new();
    let mut used_names = HashMap::<&str, &Resolved>::new();
    let mut by_ident = HashMap::<String, &Resolved>::new();
    for item in &resolved {
        if let Some(original) = used_ids.insert(item.id, item) {
            let mut err = Error::new_spanned(&item.entry.id, format!("duplicate id 0x{:X} detected", item.id));
            err.combine(Error::new_spanned(&original.entry.id, format!("0x{:X} already used by {}", item.id, original.name)));
            return Err(err);
        }
        if let Some(original) = used_names.insert(item.name.as_str(), item) {
            let mut err = Error::new_spanned(item.ident, format!("duplicate element name \"{}\" detected", item.name));
            err.combine(Error::new_spanned(original.ident, format!("\"{}\" already declared here", original.name)));
            return Err(err);
        }
        if by_ident.insert(item.ident.to_string(), item).is_some() {
            return Err(Error::new_spanned(item.ident, format!("element `{}` declared twice", item.ident)));
        }
    }

    // Parents must exist, be Master elements, and the written path must match the parent's own path.
    let mut errors: Vec<Error> = Vec::new();
    for item in &resolved {
        if let Placement::Child(parent_ident) = &item.placement {
            match by_ident.get(&parent_ident.to_string()) {
                None => errors.push(Error::new_spanned(parent_ident, format!("parent `{}` is not declared", parent_ident))),
                Some(parent) => {
                    if parent.element_type != ElementType::Master {
                        errors.push(Error::new_spanned(parent_ident, format!("parent `{}` must be of Master type", parent_ident)));
                    } else if parent.written_path() != item.written_parent_path() {
                        errors.push(Error::new(item.entry.path.span, format!("path `{}` does not match the declared path of its parent `{}`", item.written_path(), parent.written_path())));
                    } else if matches!(parent.placement, Placement::Global) {
                        errors.push(Error::new_spanned(parent_ident, "global elements cannot be parents"));
                    }
                }
            }
        }
    }
    if let Some(err) = errors.into_iter().reduce(|mut a, b| {
        a.combine(b);
        a
    }) {
        return Err(err);
    }

    let descriptors = resolved.iter().map(|item| {
        let name = &item.name;
        let element_type = format_ident!("{}", item.element_type.as_str());
        let id = item.id;
        let parent_id = match &item.placement {
            Placement::Root => item.id,
            Placement::Global => 0,
            Placement::Child(parent) => by_ident.get(&parent.to_string()).map(|p| p.id).unwrap_or_default(),
        };
        let mandatory = item.mandatory;
        let multiple = item.multiple;

        quote! {
            ebml_splice::schema::ElementDescriptor {
                name: #name,
                element_type: ebml_splice::schema::ElementType::#element_type,
                id: #id,
                parent_id: #parent_id,
                mandatory: #mandatory,
                multiple: #multiple,
            }
        }
    });

    let attrs = &input.attrs;
    let visibility = &input.visibility;
    let ident = &input.ident;
    let elements_ident = format_ident!("__{}_ELEMENTS", ident);
    let len = resolved.len();

    Ok(quote! {
        #[doc(hidden)]
        #[allow(non_upper_case_globals)]
        static #elements_ident: [ebml_splice::schema::ElementDescriptor; #len] = [
            #(#descriptors),*
        ];

        #(#attrs)*
        #visibility static #ident: ebml_splice::schema::Catalog = ebml_splice::schema::Catalog::new(&#elements_ident);
    })
}
