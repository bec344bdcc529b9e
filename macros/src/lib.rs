use proc_macro::TokenStream;
use proc_macro2::Span;
use quote::quote;
use std::collections::BTreeMap;
use std::fs::File;
use std::io::{self, BufRead};
use std::path::Path;
use syn::parse::{Parse, ParseStream};
use syn::{LitStr, Token};

/// Macro input representation:
/// include_syllables!("path/to/syllables.txt")
struct IncludeSyllablesArgs {
    path: LitStr,
}

impl Parse for IncludeSyllablesArgs {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let path: LitStr = input.parse()?;

        // Optional trailing comma, nothing else
        if !input.is_empty() {
            let _comma: Token![,] = input.parse()?;
        }
        if !input.is_empty() {
            return Err(input.error("include_syllables! takes only the syllable file path"));
        }

        Ok(IncludeSyllablesArgs { path })
    }
}

/// include_syllables!("path/to/syllables.txt")
///
/// Reads a syllable list (one syllable per line, blank lines and `#` comments
/// ignored) at compile time, relative to the calling crate's manifest
/// directory. Syllables are trimmed and lowercased, the same way the runtime
/// loaders treat them, then grouped by first character, keeping file order
/// inside each group, and emitted as
///
///  - SYLLABLES_PHF: ::phf::Map<char, &'static [&'static str]>
///
/// The macro evaluates to `::pyspell::PinyinChecker::from_phf(&SYLLABLES_PHF)`.
/// The BK-tree cannot be laid out statically, so it is still built when the
/// expression runs.
#[proc_macro]
pub fn include_syllables(input: TokenStream) -> TokenStream {
    let args = syn::parse_macro_input!(input as IncludeSyllablesArgs);
    match expand(&args) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}

fn expand(args: &IncludeSyllablesArgs) -> syn::Result<proc_macro2::TokenStream> {
    let manifest_dir = std::env::var("CARGO_MANIFEST_DIR").map_err(|_| {
        syn::Error::new(Span::call_site(), "CARGO_MANIFEST_DIR environment variable not set")
    })?;
    let file_path = Path::new(&manifest_dir).join(args.path.value());

    let file = File::open(&file_path).map_err(|e| {
        syn::Error::new_spanned(
            &args.path,
            format!(
                "include_syllables!: failed to open syllable file '{}': {}",
                file_path.display(),
                e
            ),
        )
    })?;

    // first char -> syllables; BTreeMap for a deterministic expansion
    let mut groups: BTreeMap<char, Vec<String>> = BTreeMap::new();

    for (lineno, line_res) in io::BufReader::new(file).lines().enumerate() {
        let line = line_res.map_err(|e| {
            syn::Error::new_spanned(
                &args.path,
                format!(
                    "include_syllables!: error reading line {} of {}: {}",
                    lineno + 1,
                    file_path.display(),
                    e
                ),
            )
        })?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let syllable = trimmed.to_lowercase();
        if let Some(first) = syllable.chars().next() {
            groups.entry(first).or_default().push(syllable);
        }
    }

    let entries = groups.iter().map(|(first, syllables)| {
        let key = syn::LitChar::new(*first, Span::call_site());
        let lits = syllables
            .iter()
            .map(|s| syn::LitStr::new(s, Span::call_site()));
        quote! {
            #key => &[#( #lits ),*]
        }
    });

    // Re-read the file when it changes
    let path_lit = LitStr::new(&file_path.display().to_string(), Span::call_site());

    Ok(quote! {
        {
            const _: &str = include_str!(#path_lit);

            static SYLLABLES_PHF: ::phf::Map<char, &'static [&'static str]> = ::phf::phf_map! {
                #(#entries, )*
            };

            ::pyspell::PinyinChecker::from_phf(&SYLLABLES_PHF)
        }
    })
}
