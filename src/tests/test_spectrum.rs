use approx::assert_abs_diff_eq;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use smartcore::linalg::basic::arrays::{Array2, MutArray};
use smartcore::linalg::basic::matrix::DenseMatrix;

use crate::adjacency::AdjacencyMatrix;
use crate::error::SpectralError;
use crate::laplacian::derive;
use crate::spectrum::*;

use crate::tests::{init, saltire_1, saltire_2, star_k13};

fn dense(rows: &[Vec<f64>]) -> DenseMatrix<f64> {
    let mut m = DenseMatrix::<f64>::zeros(rows.len(), rows[0].len());
    for (i, row) in rows.iter().enumerate() {
        for (j, &v) in row.iter().enumerate() {
            m.set((i, j), v);
        }
    }
    m
}

fn assert_spectrum_close(actual: &Spectrum, expected: &[f64]) {
    assert_eq!(actual.len(), expected.len(), "spectrum {} vs {:?}", actual, expected);
    for (a, e) in actual.iter().zip(expected.iter()) {
        assert_abs_diff_eq!(*a, *e, epsilon = 1e-9);
    }
}

#[test]
fn test_saltire_adjacency_spectrum() {
    init();
    let params = SpectrumParams::default();
    let s1 = spectrum(&dense(&saltire_1()), &params).unwrap();
    let s2 = spectrum(&dense(&saltire_2()), &params).unwrap();
    assert_spectrum_close(&s1, &[-2.0, 0.0, 0.0, 0.0, 2.0]);
    assert_spectrum_close(&s2, &[-2.0, 0.0, 0.0, 0.0, 2.0]);
}

#[test]
fn test_spectrum_is_sorted_ascending() {
    init();
    let a = star_k13();
    let s = spectrum(a.as_dense(), &SpectrumParams::default()).unwrap();
    assert!(s.values().windows(2).all(|w| w[0] <= w[1]));
    let r3 = 3f64.sqrt();
    assert_spectrum_close(&s, &[-r3, 0.0, 0.0, r3]);
    assert_abs_diff_eq!(s.min().unwrap(), -r3, epsilon = 1e-9);
    assert_abs_diff_eq!(s.max().unwrap(), r3, epsilon = 1e-9);
}

#[test]
fn test_derived_spectra_of_star() {
    init();
    let d = derive(&star_k13());
    let params = SpectrumParams::default();
    assert_spectrum_close(&spectrum(&d.laplacian, &params).unwrap(), &[0.0, 1.0, 1.0, 4.0]);
    assert_spectrum_close(
        &spectrum(&d.signless_laplacian, &params).unwrap(),
        &[0.0, 1.0, 1.0, 4.0],
    );
    assert_spectrum_close(
        &spectrum(&d.normalized_laplacian, &params).unwrap(),
        &[0.0, 1.0, 1.0, 2.0],
    );
    assert_spectrum_close(
        &optional_spectrum(d.line_graph.as_ref(), &params).unwrap(),
        &[-1.0, -1.0, 2.0],
    );
}

#[test]
fn test_permutation_invariance_all_representations() {
    init();
    let base = AdjacencyMatrix::from_rows(&saltire_2()).unwrap();
    let params = SpectrumParams::default();
    let reference = derive(&base);
    let mut rng = StdRng::seed_from_u64(42);

    for _ in 0..10 {
        let mut perm: Vec<usize> = (0..base.order()).collect();
        perm.shuffle(&mut rng);
        let permuted = base.permuted(&perm);
        let derived = derive(&permuted);

        let pairs = [
            (base.as_dense(), permuted.as_dense()),
            (&reference.laplacian, &derived.laplacian),
            (&reference.normalized_laplacian, &derived.normalized_laplacian),
            (&reference.signless_laplacian, &derived.signless_laplacian),
        ];
        for (m1, m2) in pairs {
            let s1 = spectrum(m1, &params).unwrap();
            let s2 = spectrum(m2, &params).unwrap();
            assert_spectrum_close(&s2, s1.values());
        }
        let l1 = optional_spectrum(reference.line_graph.as_ref(), &params).unwrap();
        let l2 = optional_spectrum(derived.line_graph.as_ref(), &params).unwrap();
        assert_spectrum_close(&l2, l1.values());
    }
}

#[test]
fn test_non_square_is_shape_error() {
    let m = DenseMatrix::<f64>::zeros(2, 3);
    assert!(matches!(
        spectrum(&m, &SpectrumParams::default()),
        Err(SpectralError::Shape { rows: 2, cols: 3 })
    ));
}

#[test]
fn test_non_finite_entries_fail_to_converge() {
    init();
    let m = dense(&[vec![0.0, f64::INFINITY], vec![1.0, 0.0]]);
    match spectrum(&m, &SpectrumParams::default()) {
        Err(SpectralError::NonConvergence { reason, .. }) => {
            assert!(reason.contains("non-finite"), "{}", reason)
        }
        other => panic!("expected non-convergence, got {:?}", other),
    }
}

#[test]
fn test_asymmetric_real_eigenvalues() {
    init();
    let m = dense(&[vec![1.0, 2.0], vec![0.0, 3.0]]);
    let s = spectrum(&m, &SpectrumParams::default()).unwrap();
    assert_spectrum_close(&s, &[1.0, 3.0]);
}

#[test]
fn test_asymmetric_eigenvalues_are_reordered() {
    init();
    // upper triangular, diagonal 3, 1, 2: the smallest eigenvalue sits in the middle
    let m = dense(&[
        vec![3.0, 1.0, 2.0],
        vec![0.0, 1.0, 4.0],
        vec![0.0, 0.0, 2.0],
    ]);
    let s = spectrum(&m, &SpectrumParams::default()).unwrap();
    assert_spectrum_close(&s, &[1.0, 2.0, 3.0]);
}

#[test]
fn test_directed_cycle_real_parts() {
    init();
    // cube roots of unity: 1 and -1/2 ± i√3/2
    let m = dense(&[
        vec![0.0, 1.0, 0.0],
        vec![0.0, 0.0, 1.0],
        vec![1.0, 0.0, 0.0],
    ]);
    let params = SpectrumParams { max_imaginary: None, ..SpectrumParams::default() };
    let s = spectrum(&m, &params).unwrap();
    assert_spectrum_close(&s, &[-0.5, -0.5, 1.0]);

    match spectrum(&m, &SpectrumParams::default()) {
        Err(SpectralError::NumericalInstability { index, real, imaginary, .. }) => {
            assert_eq!(index, 0);
            assert_abs_diff_eq!(real, -0.5, epsilon = 1e-9);
            assert_abs_diff_eq!(imaginary.abs(), 3f64.sqrt() / 2.0, epsilon = 1e-9);
        }
        other => panic!("expected numerical instability, got {:?}", other),
    }
}

#[test]
fn test_instability_index_is_position_in_spectrum() {
    init();
    // ±i block next to a real eigenvalue -2, which sorts first
    let m = dense(&[
        vec![0.0, -1.0, 0.0],
        vec![1.0, 0.0, 0.0],
        vec![0.0, 0.0, -2.0],
    ]);
    match spectrum(&m, &SpectrumParams::default()) {
        Err(SpectralError::NumericalInstability { index, real, imaginary, .. }) => {
            assert_eq!(index, 1);
            assert_abs_diff_eq!(real, 0.0, epsilon = 1e-9);
            assert_abs_diff_eq!(imaginary.abs(), 1.0, epsilon = 1e-9);
        }
        other => panic!("expected numerical instability, got {:?}", other),
    }

    let params = SpectrumParams { max_imaginary: None, ..SpectrumParams::default() };
    assert_spectrum_close(&spectrum(&m, &params).unwrap(), &[-2.0, 0.0, 0.0]);
}

#[test]
fn test_complex_eigenvalues_rejected_by_default() {
    init();
    // rotation by 90 degrees: eigenvalues ±i
    let m = dense(&[vec![0.0, -1.0], vec![1.0, 0.0]]);
    match spectrum(&m, &SpectrumParams::default()) {
        Err(SpectralError::NumericalInstability { imaginary, tolerance, .. }) => {
            assert_abs_diff_eq!(imaginary.abs(), 1.0, epsilon = 1e-9);
            assert_eq!(tolerance, 1e-6);
        }
        other => panic!("expected numerical instability, got {:?}", other),
    }
}

#[test]
fn test_complex_eigenvalues_discarded_when_unchecked() {
    init();
    let m = dense(&[vec![0.0, -1.0], vec![1.0, 0.0]]);
    let params = SpectrumParams { max_imaginary: None, ..SpectrumParams::default() };
    let s = spectrum(&m, &params).unwrap();
    assert_spectrum_close(&s, &[0.0, 0.0]);
}

#[test]
fn test_single_vertex_and_empty() {
    let params = SpectrumParams::default();
    let s = spectrum(&dense(&[vec![0.0]]), &params).unwrap();
    assert_eq!(s.values(), &[0.0]);
    assert!(optional_spectrum(None, &params).unwrap().is_empty());
}

#[test]
fn test_from_unsorted_and_display() {
    let s = Spectrum::from_unsorted(vec![2.0, -1.0, 0.5]);
    assert_eq!(s.values(), &[-1.0, 0.5, 2.0]);
    assert_eq!(s.to_string(), "[-1.0000, 0.5000, 2.0000]");
    assert_eq!(s.into_inner(), vec![-1.0, 0.5, 2.0]);
}
