use proc_macro::TokenStream;
use proc_macro2::{Literal, TokenStream as TokenStream2};
use quote::quote;
use syn::parse::Parser;
use syn::punctuated::Punctuated;
use syn::{Expr, Lit, Token, UnOp};

/// Creates a `CubicSegmentCurve` from literal control points, checked at
/// compile time.
///
/// Each point is an `(x, y)` tuple of numeric literals, optionally negated.
/// The macro rejects anything else, infinite values, and x values that
/// decrease, then expands to a `CubicSegmentCurve::from_points(...)` call.
/// The curve is not compiled.
///
/// # Examples
///
/// ```ignore
/// use cubic_segments::curve;
///
/// let mut envelope = curve![(0, 0), (0.1, 1), (0.5, 0.6), (2, 0)];
/// envelope.compile(true);
///
/// // Duplicate x values are allowed
/// let steps = curve![(0, 0), (1, 0), (1, 1), (2, 1)];
///
/// // Fails to compile: x decreases
/// // let bad = curve![(1, 0), (0, 1)];
/// ```
#[proc_macro]
pub fn curve(input: TokenStream) -> TokenStream {
    let parser = Punctuated::<Expr, Token![,]>::parse_terminated;
    let exprs = match parser.parse(input) {
        Ok(exprs) => exprs,
        Err(e) => return TokenStream::from(e.to_compile_error()),
    };

    let parsed = parse_points(exprs.iter());
    match parsed.and_then(|p| check_order(&p).map(|_| p)) {
        Ok(points) => {
            let len = points.len();
            let xs = points.iter().map(|&(x, _)| float_tokens(x));
            let ys = points.iter().map(|&(_, y)| float_tokens(y));

            let expanded = quote! {
                {
                    let points: [(f64, f64); #len] = [#((#xs, #ys)),*];
                    cubic_segments::CubicSegmentCurve::from_points(points)
                }
            };

            TokenStream::from(expanded)
        }
        Err(e) => {
            let error_msg = format!("Invalid curve points: {}", e);
            let expanded = quote! {
                compile_error!(#error_msg)
            };
            TokenStream::from(expanded)
        }
    }
}

fn parse_points<'a>(exprs: impl Iterator<Item = &'a Expr>) -> Result<Vec<(f64, f64)>, String> {
    exprs
        .enumerate()
        .map(|(index, expr)| {
            parse_point(expr).map_err(|e| format!("point {index}: {e}"))
        })
        .collect()
}

fn parse_point(expr: &Expr) -> Result<(f64, f64), String> {
    match expr {
        Expr::Tuple(tuple) if tuple.elems.len() == 2 => {
            let x = parse_number(&tuple.elems[0])?;
            let y = parse_number(&tuple.elems[1])?;
            Ok((x, y))
        }
        Expr::Paren(_) | Expr::Tuple(_) => Err("expected a pair (x, y)".to_string()),
        _ => Err("expected a tuple (x, y)".to_string()),
    }
}

fn parse_number(expr: &Expr) -> Result<f64, String> {
    let value = match expr {
        Expr::Lit(lit) => parse_literal(&lit.lit)?,
        Expr::Unary(unary) if matches!(unary.op, UnOp::Neg(_)) => -parse_number(&unary.expr)?,
        Expr::Paren(paren) => parse_number(&paren.expr)?,
        _ => return Err("coordinates must be numeric literals".to_string()),
    };
    if !value.is_finite() {
        return Err(format!("coordinate {} is not finite", value));
    }
    Ok(value)
}

fn parse_literal(lit: &Lit) -> Result<f64, String> {
    match lit {
        Lit::Int(int) => int
            .base10_parse::<f64>()
            .map_err(|_| format!("invalid number '{}'", int.base10_digits())),
        Lit::Float(float) => float
            .base10_parse::<f64>()
            .map_err(|_| format!("invalid number '{}'", float.base10_digits())),
        _ => Err("coordinates must be numeric literals".to_string()),
    }
}

fn check_order(points: &[(f64, f64)]) -> Result<(), String> {
    for (index, pair) in points.windows(2).enumerate() {
        let (previous, x) = (pair[0].0, pair[1].0);
        if x < previous {
            return Err(format!(
                "point {} has x = {}, which is less than the previous x = {}",
                index + 1,
                x,
                previous
            ));
        }
    }
    Ok(())
}

fn float_tokens(value: f64) -> TokenStream2 {
    let literal = Literal::f64_suffixed(value.abs());
    if value.is_sign_negative() {
        quote!(-#literal)
    } else {
        quote!(#literal)
    }
}
