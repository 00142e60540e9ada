use proc_macro::TokenStream;
use proc_macro2::Span;
use quote::quote;
use syn::{Ident, LitStr, parse_macro_input};

/// Creates a `FilterType` at compile time from a string literal.
///
/// The name goes through the same normalization as `FilterType::from_str`:
/// case is ignored and `-` / `_` are stripped. An unknown name is a
/// compile error instead of a runtime `Error::InvalidFilterType`.
///
/// # Examples
///
/// ```ignore
/// use quadfilter::filter_type;
///
/// let lp = filter_type!("low-pass");
/// let shelf = filter_type!("HIGH_SHELF");
/// ```
#[proc_macro]
pub fn filter_type(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as LitStr);
    let name = input.value();

    match variant_for(&name) {
        Ok(variant) => {
            let variant = Ident::new(variant, Span::call_site());
            let expanded = quote! {
                quadfilter::filters::FilterType::#variant
            };

            TokenStream::from(expanded)
        }
        Err(e) => {
            let error_msg = format!("Invalid filter type '{}': {}", name, e);
            let expanded = quote! {
                compile_error!(#error_msg)
            };
            TokenStream::from(expanded)
        }
    }
}

fn normalize(name: &str) -> String {
    name.chars()
        .filter(|c| *c != '-' && *c != '_')
        .flat_map(char::to_lowercase)
        .collect()
}

fn variant_for(name: &str) -> Result<&'static str, String> {
    let normalized = normalize(name);
    match normalized.as_str() {
        "lowpass" => Ok("LowPass"),
        "highpass" => Ok("HighPass"),
        "bandpass" => Ok("BandPass"),
        "allpass" => Ok("AllPass"),
        "notch" => Ok("Notch"),
        "peaking" => Ok("Peaking"),
        "lowshelf" => Ok("LowShelf"),
        "highshelf" => Ok("HighShelf"),
        "" => Err("empty string".to_string()),
        _ => Err(format!("unknown filter type '{}'", normalized)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize() {
        assert_eq!(normalize("Low-Pass"), "lowpass");
        assert_eq!(normalize("HIGH_SHELF"), "highshelf");
        assert_eq!(normalize("notch"), "notch");
    }

    #[test]
    fn test_variant_for() {
        assert_eq!(variant_for("lowpass"), Ok("LowPass"));
        assert_eq!(variant_for("all_pass"), Ok("AllPass"));
        assert_eq!(variant_for("Peaking"), Ok("Peaking"));
        assert_eq!(variant_for("low-shelf"), Ok("LowShelf"));

        assert!(variant_for("").is_err());
        assert!(variant_for("bandstop").is_err());
    }
}
