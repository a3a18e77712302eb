//! One report per subcommand, written to any `io::Write`.

use std::f64::consts::PI;
use std::io::Write;

use anyhow::{bail, Context, Result};
use numlab::algebra::{
    check_distributivity, check_field_distributivity, check_group_axioms, is_prime,
    primes_in_range, AdditiveGroup, Fp, MultiplicativeGroup, NotPrime,
};
use numlab::analysis::{
    calculus::verify_fundamental_theorem,
    fourier::{dft_real, idft, verify_round_trip},
    linalg::{lu_determinant, pca, recursive_determinant, verify_decompositions},
    ode::solve_homogeneous,
    roots::{cubic_roots, polynomial_roots, quadratic_roots, verify_roots},
    Complex,
};
use numlab::geometry::{
    foot_of_perpendicular, intersect_line_circle, intersect_lines, verify_pythagoras, Circle,
    Line, Point, Triangle,
};
use numlab::info::entropy::{coin_sequence_probability, verify_gibbs_inequality};
use numlab::info::hamming::{decode, encode, parse_bits, syndrome};
use numlab::nalgebra::DMatrix;
use numlab::stats::{normal_sample, one_sample_t_test};
use numlab::Tolerances;
use tracing::info;

use crate::cli::Command;

/// Run `command`, writing its report to `out`.
pub fn run<W: Write>(command: &Command, tolerances: &Tolerances, out: &mut W) -> Result<()> {
    match command {
        Command::Calculus => calculus(tolerances, out),
        Command::Fourier { signal } => fourier(signal, tolerances, out),
        Command::Quadratic { a, b, c } => quadratic(*a, *b, *c, tolerances, out),
        Command::Cubic { a, b, c, d } => cubic(*a, *b, *c, *d, tolerances, out),
        Command::Poly { coeffs } => poly(coeffs, tolerances, out),
        Command::Ode { coeffs } => ode(coeffs, tolerances, out),
        Command::Field { p } => field(*p, out),
        Command::Geometry => geometry(tolerances, out),
        Command::Ttest {
            seed,
            n,
            mean,
            std,
            mu0,
        } => ttest(*seed, *n, *mean, *std, *mu0, tolerances, out),
        Command::Info { bits, flip, tosses } => information(bits, *flip, *tosses, out),
        Command::Linalg => linalg(tolerances, out),
        Command::Prime { n, up_to } => prime(*n, *up_to, out),
    }
}

fn verdict(passed: bool) -> &'static str {
    if passed {
        "passed"
    } else {
        "FAILED"
    }
}

fn format_complex(z: Complex<f64>) -> String {
    let re = if z.re == 0.0 { 0.0 } else { z.re };
    if z.im.abs() < 1e-12 {
        format!("{re:.6}")
    } else {
        let sign = if z.im < 0.0 { '-' } else { '+' };
        format!("{re:.6} {sign} {:.6}i", z.im.abs())
    }
}

fn residual_tolerance(coeffs: &[f64], tolerances: &Tolerances) -> f64 {
    let scale = coeffs.iter().fold(1.0f64, |m, c| m.max(c.abs()));
    tolerances.absolute_tolerance * scale
}

fn write_roots<W: Write>(
    coeffs_ascending: &[f64],
    roots: &[Complex<f64>],
    tolerances: &Tolerances,
    out: &mut W,
) -> Result<()> {
    let report = verify_roots(
        coeffs_ascending,
        roots,
        residual_tolerance(coeffs_ascending, tolerances),
    );
    for (i, (root, residual)) in report.roots.iter().zip(&report.residuals).enumerate() {
        writeln!(
            out,
            "  x{} = {:<30} |p(x)| = {residual:.3e}",
            i + 1,
            format_complex(*root)
        )?;
    }
    writeln!(out, "verification: {}", verdict(report.passed))?;
    Ok(())
}

fn calculus<W: Write>(tolerances: &Tolerances, out: &mut W) -> Result<()> {
    let cases: [(&str, fn(f64) -> f64, f64); 2] = [("x^2", |x| x * x, 3.0), ("sin x", f64::sin, PI / 4.0)];
    for (name, f, x) in cases {
        let report = verify_fundamental_theorem(f, x, tolerances)?;
        writeln!(out, "f(x) = {name} at x = {x:.6}")?;
        writeln!(out, "  d/dx ∫f(t)dt = {:.6}", report.derivative_of_integral)?;
        writeln!(out, "  f(x)         = {:.6}", report.integrand_value)?;
        writeln!(out, "  fundamental theorem: {}", verdict(report.passed))?;
    }
    Ok(())
}

fn fourier<W: Write>(signal: &[f64], tolerances: &Tolerances, out: &mut W) -> Result<()> {
    let spectrum = dft_real(signal);
    let recovered = idft(&spectrum);
    writeln!(out, "signal:    {signal:?}")?;
    writeln!(out, "spectrum:")?;
    for (k, value) in spectrum.iter().enumerate() {
        writeln!(out, "  F[{k}] = {}", format_complex(*value))?;
    }
    let real: Vec<String> = recovered.iter().map(|z| format!("{:.6}", z.re)).collect();
    writeln!(out, "recovered: [{}]", real.join(", "))?;

    let max_error = signal
        .iter()
        .zip(&recovered)
        .map(|(x, z)| (x - z.re).abs())
        .fold(0.0, f64::max);
    let passed = verify_round_trip(signal, residual_tolerance(signal, tolerances));
    writeln!(out, "round trip: {} (max error {max_error:.3e})", verdict(passed))?;
    Ok(())
}

fn quadratic<W: Write>(a: f64, b: f64, c: f64, tolerances: &Tolerances, out: &mut W) -> Result<()> {
    let roots = quadratic_roots(a, b, c)?;
    writeln!(out, "{a}x^2 + {b}x + {c} = 0")?;
    write_roots(&[c, b, a], &roots, tolerances, out)
}

fn cubic<W: Write>(a: f64, b: f64, c: f64, d: f64, tolerances: &Tolerances, out: &mut W) -> Result<()> {
    let roots = cubic_roots(a, b, c, d)?;
    writeln!(out, "{a}x^3 + {b}x^2 + {c}x + {d} = 0")?;
    write_roots(&[d, c, b, a], &roots, tolerances, out)
}

fn poly<W: Write>(coeffs: &[f64], tolerances: &Tolerances, out: &mut W) -> Result<()> {
    let roots = polynomial_roots(coeffs)?;
    writeln!(out, "coefficients (ascending): {coeffs:?}")?;
    if roots.is_empty() {
        writeln!(out, "constant polynomial: no roots")?;
        return Ok(());
    }
    write_roots(coeffs, &roots, tolerances, out)
}

fn ode<W: Write>(coeffs: &[f64], tolerances: &Tolerances, out: &mut W) -> Result<()> {
    let solution = solve_homogeneous(coeffs, tolerances)?;
    writeln!(out, "coefficients: {coeffs:?}")?;
    for root in &solution.roots {
        writeln!(
            out,
            "  root {} (multiplicity {})",
            format_complex(root.value),
            root.multiplicity
        )?;
    }
    writeln!(out, "{solution}")?;
    Ok(())
}

macro_rules! with_prime_modulus {
    ($p:expr, $out:expr, [$($prime:literal),+ $(,)?]) => {
        match $p {
            $($prime => field_report::<$prime, _>($out),)+
            other => bail!(
                "F_{other} is not built in; supported moduli: {}",
                [$($prime),+].map(|q: u64| q.to_string()).join(", ")
            ),
        }
    };
}

fn field<W: Write>(p: u64, out: &mut W) -> Result<()> {
    if !is_prime(p) {
        return Err(NotPrime { modulus: p }.into());
    }
    with_prime_modulus!(p, out, [2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37, 41, 43, 47])
}

fn field_report<const P: u64, W: Write>(out: &mut W) -> Result<()> {
    let additive = check_group_axioms(&AdditiveGroup::<P>::new()?)?;
    writeln!(out, "{additive}")?;
    let multiplicative = check_group_axioms(&MultiplicativeGroup::<P>::new()?)?;
    writeln!(out, "{multiplicative}")?;

    let (a, b, c) = (Fp::<P>::new(3), Fp::new(7), Fp::new(10));
    check_distributivity(a, b, c)?;
    writeln!(out, "distributivity: {a}·({b}+{c}) = {}", a * (b + c))?;
    let triples = check_field_distributivity::<P>()?;
    writeln!(out, "distributivity holds for all {triples} triples")?;

    let (x, y) = (Fp::<P>::new(5), Fp::new(8));
    writeln!(out, "arithmetic in F_{P}:")?;
    writeln!(out, "  {x} + {y} = {}", x + y)?;
    writeln!(out, "  {x} - {y} = {}", x - y)?;
    writeln!(out, "  {x} * {y} = {}", x * y)?;
    match x.checked_div(y) {
        Ok(q) => writeln!(out, "  {x} / {y} = {q}  (check: {q} * {y} = {})", q * y)?,
        Err(e) => writeln!(out, "  {x} / {y}: {e}")?,
    }
    Ok(())
}

fn geometry<W: Write>(tolerances: &Tolerances, out: &mut W) -> Result<()> {
    let eps = tolerances.geometry_epsilon;
    let l1 = Line::through(&Point::new(0.0, 0.0), &Point::new(10.0, 10.0))?;
    let l2 = Line::through(&Point::new(0.0, 10.0), &Point::new(10.0, 0.0))?;
    let circle = Circle::new(Point::new(5.0, 5.0), 3.0)?;

    match intersect_lines(&l1, &l2, eps) {
        Some(p) => writeln!(out, "L1 ∩ L2 = {p}")?,
        None => writeln!(out, "L1 ∩ L2: parallel")?,
    }
    let hits: Vec<String> = intersect_line_circle(&l1, &circle)
        .iter()
        .map(ToString::to_string)
        .collect();
    writeln!(out, "L1 ∩ C1 = [{}]", hits.join(", "))?;

    let a = Point::new(3.0, 4.0);
    let x_axis = Line::through(&Point::origin(), &Point::new(10.0, 0.0))?;
    let b = Point::origin();
    let report = verify_pythagoras(&a, &x_axis, &b, tolerances.relative_tolerance);
    writeln!(
        out,
        "A = {a}, foot P = {}, B = {b}",
        foot_of_perpendicular(&a, &x_axis)
    )?;
    writeln!(out, "  AP² + PB² = {:.2}", report.ap_squared + report.pb_squared)?;
    writeln!(out, "  AB²       = {:.2}", report.ab_squared)?;
    writeln!(out, "  pythagoras: {}", verdict(report.passed))?;

    let mut triangle = Triangle::new(Point::new(0.0, 0.0), Point::new(2.0, 0.0), Point::new(1.0, 2.0));
    writeln!(out, "initial:            {triangle}")?;
    triangle.translate(5.0, 5.0);
    writeln!(out, "translated (+5,+5): {triangle}")?;
    triangle.rotate(90.0, &Point::new(5.0, 5.0));
    writeln!(out, "rotated 90° @(5,5): {triangle}")?;
    Ok(())
}

fn ttest<W: Write>(
    seed: u64,
    n: usize,
    mean: f64,
    std: f64,
    mu0: f64,
    tolerances: &Tolerances,
    out: &mut W,
) -> Result<()> {
    let data = normal_sample(mean, std, n, seed)?;
    info!(seed, n, "drew normal sample");
    let result = one_sample_t_test(&data, mu0)?;
    let alpha = tolerances.significance_level;

    writeln!(out, "sample of {n} from N({mean}, {std}²), seed {seed}; H0: mu = {mu0}")?;
    writeln!(out, "  sample mean    = {:.4}", result.mean)?;
    writeln!(out, "  sample sd      = {:.4}", result.std_dev)?;
    writeln!(out, "  standard error = {:.4}", result.standard_error)?;
    writeln!(out, "  t statistic    = {:.4} (df = {})", result.t_statistic, result.df)?;
    writeln!(out, "  p-value        = {:.4}", result.p_value)?;
    if result.reject_null(alpha) {
        writeln!(out, "p < {alpha}: reject H0")?;
    } else {
        writeln!(out, "p >= {alpha}: cannot reject H0")?;
    }
    Ok(())
}

fn information<W: Write>(bits: &str, flip: usize, tosses: u64, out: &mut W) -> Result<()> {
    let coin = coin_sequence_probability(tosses, 0.5)?;
    writeln!(out, "{tosses} fair coin tosses:")?;
    writeln!(out, "  p^n directly = {:e}", coin.direct)?;
    writeln!(out, "  log2(p^n)    = {} bits", coin.log2)?;

    let (p, q) = ([0.3, 0.7], [0.1, 0.9]);
    let gibbs = verify_gibbs_inequality(&p, &q)?;
    writeln!(out, "p = {p:?}, q = {q:?}")?;
    writeln!(out, "  H(p, p) = {:.4}", gibbs.self_entropy)?;
    writeln!(out, "  H(p, q) = {:.4}", gibbs.cross_entropy)?;
    writeln!(out, "  H(p, p) <= H(p, q): {}", verdict(gibbs.passed))?;

    let message = parse_bits::<4>(bits).context("parsing --bits")?;
    let mut word = encode(message)?;
    writeln!(out, "Hamming(7,4) message {message:?}")?;
    writeln!(out, "  encoded:   {word}")?;
    word.flip(flip)?;
    writeln!(out, "  corrupted: {word} (bit {flip} flipped)")?;
    let position = syndrome(&word);
    let outcome = decode(word);
    match outcome.corrected_position {
        Some(pos) => writeln!(out, "  syndrome points at position {pos}, corrected")?,
        None => writeln!(out, "  syndrome {position}: no error detected")?,
    }
    writeln!(out, "  decoded:   {:?}", outcome.data)?;
    writeln!(out, "  recovered: {}", verdict(outcome.data == message))?;
    Ok(())
}

fn linalg<W: Write>(tolerances: &Tolerances, out: &mut W) -> Result<()> {
    let nearly_singular = DMatrix::from_row_slice(3, 3, &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0 + 1e-9]);
    writeln!(out, "cofactor determinant: {:e}", recursive_determinant(&nearly_singular)?)?;
    writeln!(out, "LU determinant:       {:e}", lu_determinant(&nearly_singular)?)?;

    let a = DMatrix::from_row_slice(2, 2, &[4.0, 11.0, 1.0, 2.0]);
    let report = verify_decompositions(&a, tolerances.relative_tolerance)?;
    match report.eigen_error {
        Some(err) => writeln!(out, "eigen reconstruction error: {err:.3e}")?,
        None => writeln!(out, "eigen reconstruction: not real")?,
    }
    writeln!(out, "SVD reconstruction error:   {:.3e}", report.svd_error)?;
    writeln!(out, "decompositions: {}", verdict(report.passed))?;

    let data = DMatrix::from_row_slice(5, 2, &[2.5, 2.4, 0.5, 0.7, 2.2, 2.9, 1.9, 2.2, 3.1, 3.0]);
    let projected = pca(&data, 1)?;
    let scores: Vec<String> = projected.iter().map(|v| format!("{v:.4}")).collect();
    writeln!(out, "PCA scores on the first component: [{}]", scores.join(", "))?;
    Ok(())
}

fn prime<W: Write>(n: u64, up_to: Option<u64>, out: &mut W) -> Result<()> {
    if is_prime(n) {
        writeln!(out, "{n} is prime")?;
    } else {
        writeln!(out, "{n} is not prime")?;
    }
    if let Some(limit) = up_to {
        writeln!(out, "primes from 1 to {limit}: {:?}", primes_in_range(1, limit))?;
    }
    Ok(())
}
