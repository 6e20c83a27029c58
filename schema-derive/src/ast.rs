use syn::parse::{Parse, ParseBuffer, ParseStream};
use syn::punctuated::Punctuated;
use syn::{Attribute, Ident, LitInt, LitStr, Result, Token, Visibility};

use crate::pathing::EBMLPath;

pub struct SchemaInput {
    pub attrs: Vec<Attribute>,
    pub visibility: Visibility,
    pub ident: Ident,
    pub entries: Punctuated<SchemaEntry, Token![,]>,
}

impl Parse for SchemaInput {
    fn parse(input: ParseStream) -> Result<Self> {
        let attrs = input.call(Attribute::parse_outer)?;
        let visibility: Visibility = input.parse()?;
        input.parse::<Token![static]>()?;
        let ident = input.parse::<Ident>()?;
        let content: ParseBuffer;
        syn::braced!(content in input);
        let entries = content.parse_terminated(SchemaEntry::parse)?;
        Ok(Self {
            attrs,
            visibility,
            ident,
            entries,
        })
    }
}

///
/// One line of the table: `Path/To/Name [as "Display Name"]: Type = id [flags]`
///
pub struct SchemaEntry {
    pub path: EBMLPath,
    pub rename: Option<LitStr>,
    pub ty: Ident,
    pub id: LitInt,
    pub flags: Vec<Ident>,
}

impl Parse for SchemaEntry {
    fn parse(input: ParseStream) -> Result<Self> {
        let path: EBMLPath = input.parse()?;
        let rename = if input.peek(Token![as]) {
            input.parse::<Token![as]>()?;
            Some(input.parse::<LitStr>()?)
        } else {
            None
        };
        input.parse::<Token![:]>()?;
        let ty: Ident = input.parse()?;
        input.parse::<Token![=]>()?;
        let id: LitInt = input.parse()?;
        let flags = if input.peek(syn::token::Bracket) {
            let content;
            syn::bracketed!(content in input);
            let flags: Punctuated<Ident, Token![,]> = content.parse_terminated(Ident::parse)?;
            flags.into_iter().collect()
        } else {
            Vec::new()
        };
        Ok(Self {
            path,
            rename,
            ty,
            id,
            flags,
        })
    }
}
