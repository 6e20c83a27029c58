use proc_macro2::Span;
use syn::{punctuated::Punctuated, Token, parse::{Parse, ParseStream}, Ident, Result};
use quote::{quote, TokenStreamExt};

pub struct EBMLPath {
    pub span: Span,
    pub parts: Punctuated<PathPart, Token![/]>,
}

impl Parse for EBMLPath {
    fn parse(input: ParseStream) -> Result<Self> {
        let span = input.span();
        let parts: Punctuated<PathPart, Token![/]> = Punctuated::parse_separated_nonempty(input)?;
        Ok(Self { parts, span })
    }
}

impl EBMLPath {
    pub fn len(&self) -> usize {
        self.parts.len()
    }

    ///
    /// The element being declared - always the last path segment.
    ///
    pub fn element(&self) -> Option<&Ident> {
        match self.parts.last() {
            Some(PathPart::Ident(ident)) => Some(ident),
            _ => None,
        }
    }

    ///
    /// Every segment before the element.
    ///
    pub fn ancestors(&self) -> impl Iterator<Item = &PathPart> {
        self.parts.iter().take(self.parts.len().saturating_sub(1))
    }

    pub fn is_global(&self) -> bool {
        self.parts.len() == 2 && matches!(self.parts.first(), Some(PathPart::Global))
    }
}

#[derive(PartialEq)]
pub enum PathPart {
    Ident(Ident),
    Global,
}

impl Parse for PathPart {
    fn parse(input: ParseStream) -> Result<Self> {
        if input.lookahead1().peek(syn::token::Paren) {
            let content;
            syn::parenthesized!(content in input);
            content.parse::<Token![-]>()?;
            Ok(PathPart::Global)
        } else {
            let id: Ident = input.parse()?;
            Ok(PathPart::Ident(id))
        }
    }
}

impl std::fmt::Display for PathPart {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PathPart::Ident(id) => write!(f, "{id}"),
            PathPart::Global => write!(f, "(-)"),
        }
    }
}

impl quote::ToTokens for PathPart {
    fn to_tokens(&self, tokens: &mut proc_macro2::TokenStream) {
        match self {
            PathPart::Ident(id) => tokens.append(id.clone()),
            PathPart::Global => tokens.extend(quote!{(-)}),
        }
    }
}
