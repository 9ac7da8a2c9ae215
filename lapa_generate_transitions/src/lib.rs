#![deny(clippy::all, clippy::if_not_else, clippy::enum_glob_use)]

//! Rule table generator for the lapa segmentation engines.
//!
//! ```ignore
//! generate_transitions!(grapheme_transitions, GraphemeState, GraphemeProperty, bool, {
//!     Any {
//!         Cr => (Cr, true, 50),
//!         Lf | Control => (ControlLf, true, 50),
//!     },
//!     Cr {
//!         Lf => (ControlLf, false, 30),
//!     },
//! });
//! ```
//!
//! Every entry reads `origin { property => (target, verdict, rank) }`. Origins
//! and properties accept `|` alternatives and an origin may appear more than
//! once. A verdict written as a bare variant name is qualified with the verdict
//! type, anything else is used as an expression. Assigning the same
//! `(origin, property)` pair twice is a compile error.

extern crate proc_macro;

use std::collections::HashSet;
use std::iter::Peekable;

use proc_macro2::TokenTree::{Group, Ident, Literal, Punct};
use proc_macro2::{token_stream, TokenStream, TokenTree};
use quote::quote;

/// Create a `const fn` which will return a dense table with all rule transitions.
#[proc_macro]
pub fn generate_transitions(item: proc_macro::TokenStream) -> proc_macro::TokenStream {
    // Convert from proc_macro -> proc_macro2
    let item: TokenStream = item.into();
    let mut iter = item.into_iter().peekable();

    // Output function name followed by the state, property and verdict types
    let fn_name = next_ident(&mut iter);
    expect_punct(&mut iter, ',');
    let state_ty = next_ident(&mut iter);
    expect_punct(&mut iter, ',');
    let property_ty = next_ident(&mut iter);
    expect_punct(&mut iter, ',');
    let verdict_ty = next_ident(&mut iter);
    expect_punct(&mut iter, ',');

    let mut table = Table {
        state_ty: state_ty.clone(),
        property_ty: property_ty.clone(),
        verdict_ty: verdict_ty.clone(),
        assigned: HashSet::new(),
    };

    // Create token stream to assign each transition to the table
    let assignments_stream = states_stream(&mut iter, &mut table);

    quote!(
        const fn #fn_name() -> [[Option<Transition<#state_ty, #verdict_ty>>; #property_ty::COUNT]; #state_ty::COUNT] {
            let mut transitions = [[None; #property_ty::COUNT]; #state_ty::COUNT];

            #assignments_stream

            transitions
        }
    )
    .into()
}

/// Types of the table being generated and the cells written so far.
struct Table {
    state_ty: TokenTree,
    property_ty: TokenTree,
    verdict_ty: TokenTree,
    assigned: HashSet<(String, String)>,
}

impl Table {
    /// Record a cell, rejecting rules that overwrite an earlier one.
    fn claim(&mut self, origin: &TokenTree, property: &TokenTree) {
        let key = (origin.to_string(), property.to_string());
        if !self.assigned.insert(key) {
            panic!("Duplicate transition for ({origin}, {property})");
        }
    }

    /// Prefix a bare variant name with the verdict type.
    fn qualify_verdict(&self, verdict: TokenStream) -> TokenStream {
        let verdict_ty = &self.verdict_ty;
        let mut tokens = verdict.clone().into_iter();
        match (tokens.next(), tokens.next()) {
            (Some(Ident(variant)), None) if variant != "true" && variant != "false" => {
                quote!(#verdict_ty::#variant)
            },
            _ => verdict,
        }
    }
}

/// Generate the table assignment statements for all origin states.
fn states_stream(iter: &mut impl Iterator<Item = TokenTree>, table: &mut Table) -> TokenStream {
    let mut states_stream = next_group(iter).into_iter().peekable();

    // Loop over all origin state entries
    let mut tokens = quote!();
    while states_stream.peek().is_some() {
        // Add all mappings for these states
        tokens.extend(state_entry_stream(&mut states_stream, table));

        // Allow trailing comma
        optional_punct(&mut states_stream, ',');
    }
    tokens
}

/// Generate the table assignment statements for one group of origin states.
fn state_entry_stream(iter: &mut Peekable<token_stream::IntoIter>, table: &mut Table) -> TokenStream {
    // Origin state names, `A | B { .. }` shares one body
    let origins = alternatives(iter);

    // Token stream with all the property->target mappings
    let mut changes_stream = next_group(iter).into_iter().peekable();

    let mut tokens = quote!();
    while changes_stream.peek().is_some() {
        // Add next mapping for these states
        tokens.extend(change_stream(&mut changes_stream, &origins, table));

        // Allow trailing comma
        optional_punct(&mut changes_stream, ',');
    }
    tokens
}

/// Generate the assignment statements for a single property->target mapping.
fn change_stream(
    iter: &mut Peekable<token_stream::IntoIter>,
    origins: &[TokenTree],
    table: &mut Table,
) -> TokenStream {
    let properties = alternatives(iter);

    // Separator between the properties and the target
    expect_punct(iter, '=');
    expect_punct(iter, '>');

    // Target state, verdict and rank
    let mut target_stream = next_group(iter).into_iter().peekable();
    let (target_state, verdict, rank) = target_change(&mut target_stream);
    let verdict = table.qualify_verdict(verdict);

    let state_ty = table.state_ty.clone();
    let property_ty = table.property_ty.clone();

    let mut tokens = quote!();
    for origin in origins {
        for property in &properties {
            table.claim(origin, property);
            tokens.extend(quote!(
                transitions[#state_ty::#origin as usize][#property_ty::#property as usize] =
                    Some(Transition::new(#state_ty::#target_state, #verdict, #rank));
            ));
        }
    }
    tokens
}

/// Get target state, verdict expression and rule rank.
fn target_change(iter: &mut Peekable<token_stream::IntoIter>) -> (TokenTree, TokenStream, TokenTree) {
    let target_state = next_ident(iter);

    // Separator between state and verdict
    expect_punct(iter, ',');

    // The verdict runs up to the next top level comma
    let mut verdict = TokenStream::new();
    loop {
        match iter.next() {
            Some(Punct(punct)) if punct.as_char() == ',' => break,
            Some(token) => verdict.extend(Some(token)),
            None => panic!("Expected rule rank after verdict"),
        }
    }
    if verdict.is_empty() {
        panic!("Expected verdict for target {target_state}");
    }

    let rank = match iter.next() {
        Some(Literal(literal)) => TokenTree::Literal(literal),
        token => panic!("Expected rule rank literal, but got {token:?}"),
    };

    (target_state, verdict, rank)
}

/// Read identifiers separated by `|`.
fn alternatives(iter: &mut Peekable<token_stream::IntoIter>) -> Vec<TokenTree> {
    let mut names = vec![next_ident(iter)];
    while optional_punct(iter, '|') {
        names.push(next_ident(iter));
    }
    names
}

/// Check if next token matches specific punctuation.
fn optional_punct(iter: &mut Peekable<token_stream::IntoIter>, c: char) -> bool {
    match iter.peek() {
        Some(Punct(punct)) if punct.as_char() == c => iter.next().is_some(),
        _ => false,
    }
}

/// Ensure next token matches specific punctuation.
///
/// # Panics
///
/// Panics if the punctuation does not match.
fn expect_punct(iter: &mut impl Iterator<Item = TokenTree>, c: char) {
    match iter.next() {
        Some(Punct(ref punct)) if punct.as_char() == c => (),
        token => panic!("Expected punctuation '{c}', but got {token:?}"),
    }
}

/// Get next token as an identifier.
///
/// # Panics
///
/// Panics if the next token is not an identifier.
fn next_ident(iter: &mut impl Iterator<Item = TokenTree>) -> TokenTree {
    match iter.next() {
        Some(Ident(ident)) => TokenTree::Ident(ident),
        token => panic!("Expected identifier, but got {token:?}"),
    }
}

/// Get next token as [`Group`].
///
/// # Panics
///
/// Panics if the next token is not a [`Group`].
fn next_group(iter: &mut impl Iterator<Item = TokenTree>) -> TokenStream {
    match iter.next() {
        Some(Group(group)) => group.stream(),
        token => panic!("Expected group, but got {token:?}"),
    }
}
