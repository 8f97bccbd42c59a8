//! Product units: the term-rewriting core of unit algebra.
//!
//! A product unit is an ordered list of [`Factor`]s, each a unit raised to
//! an integer power over an integer root.  [`from_factors`] is the single
//! source of simplification truth: it flattens nested products, groups
//! factors by unit, merges each group onto a common root, reduces the
//! resulting exponents by gcd, drops cancelled factors, and collapses the
//! degenerate cases (empty product, single degree-1 factor) back to plain
//! units.  Multiplication, division, powers, and roots are all thin wrappers
//! over it.

use crate::converter::UnitConverter;
use crate::dimension::Dimension;
use crate::unit::Unit;
use msr_core::{gcd, Error, Rational, Result};

/// One multiplicative term of a product unit: `unit^(pow/root)`.
///
/// Canonical form: `root > 0` and `gcd(pow, root) == 1` (for non-zero
/// powers), established at construction.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Factor {
    unit: Unit,
    pow: i32,
    root: i32,
}

impl Factor {
    /// Create a factor. Fails for a zero root or on exponent overflow while
    /// canonicalizing.
    pub fn new(unit: Unit, pow: i32, root: i32) -> Result<Factor> {
        if root == 0 {
            return Err(Error::Construction(
                "factor root must be non-zero".into(),
            ));
        }
        let (mut pow, mut root) = if root < 0 {
            (
                pow.checked_neg()
                    .ok_or(Error::ExponentOverflow("factor power negation"))?,
                root.checked_neg()
                    .ok_or(Error::ExponentOverflow("factor root negation"))?,
            )
        } else {
            (pow, root)
        };
        if pow != 0 {
            let g = gcd(pow, root);
            pow /= g;
            root /= g;
        } else {
            root = 1;
        }
        Ok(Factor { unit, pow, root })
    }

    /// The underlying unit.
    pub fn unit(&self) -> &Unit {
        &self.unit
    }

    /// The integer power.
    pub fn pow(&self) -> i32 {
        self.pow
    }

    /// The integer root (always positive).
    pub fn root(&self) -> i32 {
        self.root
    }

    /// The exponent `pow / root` as a rational.
    pub fn exponent(&self) -> Result<Rational> {
        Rational::new(self.pow, self.root)
    }
}

/// The product of two units, flattened and simplified.
pub fn from_product(lhs: &Unit, rhs: &Unit) -> Result<Unit> {
    from_factors(vec![
        Factor::new(lhs.clone(), 1, 1)?,
        Factor::new(rhs.clone(), 1, 1)?,
    ])
}

/// The quotient of two units, flattened and simplified.
pub fn from_division(lhs: &Unit, rhs: &Unit) -> Result<Unit> {
    from_factors(vec![
        Factor::new(lhs.clone(), 1, 1)?,
        Factor::new(rhs.clone(), -1, 1)?,
    ])
}

/// `unit` raised to the integer power `n`.
///
/// `n = 0` yields the dimensionless unit, `n = 1` the unit itself; a product
/// operand is flattened rather than nested.
pub fn from_power(unit: &Unit, n: i32) -> Result<Unit> {
    if n == 1 {
        return Ok(unit.clone());
    }
    from_factors(vec![Factor::new(unit.clone(), n, 1)?])
}

/// The `n`-th root of `unit`. Fails for `n = 0`.
pub fn from_root(unit: &Unit, n: i32) -> Result<Unit> {
    if n == 0 {
        return Err(Error::Construction(
            "cannot take the zeroth root of a unit".into(),
        ));
    }
    if n == 1 {
        return Ok(unit.clone());
    }
    from_factors(vec![Factor::new(unit.clone(), 1, n)?])
}

/// Build a unit from a factor list, applying the full simplification
/// pipeline described in the module docs.
pub fn from_factors(factors: Vec<Factor>) -> Result<Unit> {
    let mut flat = Vec::new();
    for factor in &factors {
        flatten_into(factor, &mut flat)?;
    }

    // Group by unit (linear scan; factor lists are short).
    let mut groups: Vec<(Unit, Vec<(i32, i32)>)> = Vec::new();
    for f in flat {
        match groups.iter_mut().find(|(u, _)| *u == f.unit) {
            Some((_, pairs)) => pairs.push((f.pow, f.root)),
            None => groups.push((f.unit, vec![(f.pow, f.root)])),
        }
    }

    let mut merged = Vec::new();
    for (unit, pairs) in groups {
        if let Some(factor) = merge_group(unit, &pairs)? {
            merged.push(factor);
        }
    }

    // Canonical order, so equality and hashing are order-independent.
    merged.sort_by(|a, b| {
        a.unit
            .symbol()
            .cmp(b.unit.symbol())
            .then(a.pow.cmp(&b.pow))
            .then(a.root.cmp(&b.root))
    });

    if merged.is_empty() {
        return Ok(Unit::one());
    }
    if merged.len() == 1 && merged[0].pow == 1 && merged[0].root == 1 {
        return Ok(merged.swap_remove(0).unit);
    }

    let symbol = product_symbol(&merged);
    let dimension = product_dimension(&merged)?;
    let to_coherent = coherent_converter(&merged);
    let coherent = if merged.iter().all(|f| f.unit.is_coherent()) {
        None
    } else {
        let coh_factors = merged
            .iter()
            .map(|f| Factor::new(f.unit.coherent_unit(), f.pow, f.root))
            .collect::<Result<Vec<_>>>()?;
        Some(from_factors(coh_factors)?)
    };
    Ok(Unit::product(symbol, merged, dimension, coherent, to_coherent))
}

// Expand product-unit factors in place: (u^(a/b))^(p/r) = u^(ap/br).
fn flatten_into(factor: &Factor, out: &mut Vec<Factor>) -> Result<()> {
    match factor.unit.factors() {
        Some(inner) => {
            for g in inner {
                let expanded = Factor::new(
                    g.unit.clone(),
                    mul_exponent(g.pow, factor.pow)?,
                    mul_exponent(g.root, factor.root)?,
                )?;
                flatten_into(&expanded, out)?;
            }
            Ok(())
        }
        None => {
            out.push(factor.clone());
            Ok(())
        }
    }
}

// Merge all (pow, root) pairs of one unit onto the lcm of their roots, then
// reduce. Returns None when the powers cancel.
fn merge_group(unit: Unit, pairs: &[(i32, i32)]) -> Result<Option<Factor>> {
    let mut root: i64 = 1;
    for &(_, r) in pairs {
        root = lcm(root, r as i64)?;
    }
    let mut pow: i64 = 0;
    for &(p, r) in pairs {
        let scaled = (p as i64)
            .checked_mul(root / r as i64)
            .ok_or(Error::ExponentOverflow("factor power merge"))?;
        pow = pow
            .checked_add(scaled)
            .ok_or(Error::ExponentOverflow("factor power merge"))?;
    }
    if pow == 0 {
        return Ok(None);
    }
    let g = gcd(pow, root);
    let pow = i32::try_from(pow / g).map_err(|_| Error::ExponentOverflow("merged power"))?;
    let root = i32::try_from(root / g).map_err(|_| Error::ExponentOverflow("merged root"))?;
    Factor::new(unit, pow, root).map(Some)
}

fn lcm(a: i64, b: i64) -> Result<i64> {
    (a / gcd(a, b))
        .checked_mul(b)
        .ok_or(Error::ExponentOverflow("root lcm"))
}

fn mul_exponent(a: i32, b: i32) -> Result<i32> {
    i32::try_from(a as i64 * b as i64).map_err(|_| Error::ExponentOverflow("factor flattening"))
}

fn product_symbol(factors: &[Factor]) -> String {
    let mut out = String::new();
    for (i, f) in factors.iter().enumerate() {
        if i > 0 {
            out.push('·');
        }
        let sym = f.unit.symbol();
        let needs_parens = sym.contains(['·', '/', '+', '^']);
        if needs_parens {
            out.push('(');
            out.push_str(sym);
            out.push(')');
        } else {
            out.push_str(sym);
        }
        if f.root == 1 {
            if f.pow != 1 {
                out.push_str(&format!("^{}", f.pow));
            }
        } else {
            out.push_str(&format!("^({}/{})", f.pow, f.root));
        }
    }
    out
}

fn product_dimension(factors: &[Factor]) -> Result<Dimension> {
    let mut dim = Dimension::none();
    for f in factors {
        dim = dim.multiply(&f.unit.dimension().pow_rational(&f.exponent()?)?)?;
    }
    Ok(dim)
}

// Fold the factors' converters to coherent form. Only defined when every
// non-identity factor converter is linear and sits at a unit root; anything
// else cannot be distributed over a product and is reported, not
// approximated.
fn coherent_converter(factors: &[Factor]) -> Result<UnitConverter> {
    let mut conv = UnitConverter::Identity;
    for f in factors {
        let c = f.unit.converter_to_coherent()?;
        if c.is_identity() {
            continue;
        }
        if !c.is_linear() {
            return Err(Error::NonLinearConverter(format!(
                "factor {} carries a non-linear converter",
                f.unit.symbol()
            )));
        }
        if f.root != 1 {
            return Err(Error::NonLinearConverter(format!(
                "factor {} has root {} but a non-identity converter",
                f.unit.symbol(),
                f.root
            )));
        }
        conv = conv.concatenate(&converter_pow(&c, f.pow));
    }
    Ok(conv)
}

fn converter_pow(c: &UnitConverter, n: i32) -> UnitConverter {
    let base = if n >= 0 { c.clone() } else { c.inverse() };
    let mut out = UnitConverter::Identity;
    for _ in 0..n.unsigned_abs() {
        out = out.concatenate(&base);
    }
    out
}
