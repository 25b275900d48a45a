//! Tour of the library: dense matrices, vectors and slice views, and the
//! structured variants. Run with `RUST_LOG=debug` to see receiver reshapes
//! and view creation.

use numat::{
    formatted, reduce, DenseMatrix, DiagonalMatrix, Result, SymmetricMatrix, TriKind,
    TriangularMatrix, Vector,
};

fn seq(n: usize) -> Vec<f64> {
    (1..=n).map(|x| x as f64).collect()
}

fn dense() -> Result<()> {
    let m1 = DenseMatrix::<f64>::new(3, 4, None)?;
    println!("zero matrix:\n{}\n", m1);

    let mut big = DenseMatrix::<f64>::zeros(100, 100)?;
    for i in 0..100 {
        big.set(i, i, 1.0)?;
    }
    println!(
        "excerpt big identity matrix: {}\n",
        formatted(&big).prefix(" ").excerpt(3)
    );

    let m2 = DenseMatrix::new(3, 4, Some(seq(12).as_slice()))?;
    let m3 = m2.transpose();
    println!("m2:\n{}\n\nm2^T:\n{}\n", m2, m3);

    let mut c = DenseMatrix::empty();
    c.add(&m3, &m3)?;
    println!("m2^T + m2^T:\n{}\n", c);

    let mut d = DenseMatrix::empty();
    d.mul(&m2, &m3)?;
    println!("m2 * m2^T:\n{}\n", d);

    let mut e = DenseMatrix::empty();
    e.mul_elem(&m3, &m3)?;
    println!("m2^T .* m2^T:\n{}\n", e);

    let dense4 = DenseMatrix::new(3, 3, Some(seq(9).as_slice()))?;
    for j in 0..3 {
        println!("column {}: {:?}", j, dense4.col(j)?);
    }
    println!("row 0: {:?}", dense4.row(0)?);
    println!("det: {:e}", dense4.det()?);
    println!(
        "min: {}  max: {}  sum: {}",
        dense4.min()?,
        dense4.max()?,
        dense4.sum()?
    );
    println!("diagonal view:\n{}\n", dense4.diag_view());
    Ok(())
}

fn vectors() -> Result<()> {
    let v = Vector::new(10, Some(seq(10).as_slice()))?;
    println!("v:\n{}\n", v);
    println!("dims: {:?}  len: {}  cap: {}", v.dims(), v.len(), v.cap());
    println!("v^T: {}\n", v.transpose());

    println!("v[4..6]:\n{}\n", v.slice_vec(4, 6)?);
    if let Err(err) = v.slice_vec(0, -1) {
        println!("v[0..-1]: {}\n", err);
    }

    let mut v = v;
    let w = v.slice_vec(0, 9)?;
    v.set_vec(5, 100.0)?;
    println!("w after v[5] = 100:\n{}\n", w);

    let v1 = Vector::<f64>::new(5, None)?;
    let v2 = Vector::new(5, Some(&[1.0, 0.0, 2.0, 0.0, 3.0]))?;
    let mut v3 = Vector::empty();
    v3.add_vec(&v1, &v2)?;
    println!("v1 + v2:\n{}\n", v3);
    v3.sub_vec(&v1, &v2)?;
    println!("v1 - v2:\n{}\n", v3);
    v3.scale_vec(10.0, &v2)?;
    println!("10 * v2:\n{}\n", v3);

    let mut v5 = Vector::empty();
    v5.mul_elem_vec(&v2, &v2)?;
    println!(
        "v2 .* v2: max {}  min {}  sum {}",
        reduce::max(&v5)?,
        reduce::min(&v5)?,
        reduce::sum(&v5)?
    );
    println!(
        "dot(v1, v2) = {}  dot(v2, v2) = {}\n",
        reduce::dot(&v1, &v2)?,
        reduce::dot(&v2, &v2)?
    );

    let p = Vector::new(3, Some(&[2.0, 3.0, 4.0]))?;
    let rot = DenseMatrix::new(3, 3, Some(&[0.0, -1.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 1.0]))?;
    let mut r = Vector::empty();
    r.mul_vec(&rot, &p)?;
    println!("rotated:\n{}\n", r);
    Ok(())
}

fn structured() -> Result<()> {
    let mut s = SymmetricMatrix::new(3, Some(seq(9).as_slice()))?;
    println!("symmetric:\n{}\n", s);
    s.set_sym(1, 0, -100.0)?;
    println!("after set_sym(1, 0, -100):\n{}\n", s);

    let mut d = DiagonalMatrix::new(10, Some(seq(100).as_slice()))?;
    d.set_diag(1, 100.0)?;
    println!("diagonal ({} entries):\n{}\n", d.diag(), formatted(&d).dot_zeros());

    let mut u = TriangularMatrix::new(3, TriKind::Upper, Some(seq(9).as_slice()))?;
    let l = TriangularMatrix::new(3, TriKind::Lower, Some(seq(9).as_slice()))?;
    println!("upper:\n{}\n\nlower:\n{}\n", u, l);
    println!("upper^T:\n{}\n", u.transpose());

    if let Err(err) = u.set_tri(2, 0, 100.0) {
        println!("set_tri(2, 0): {}", err);
    }
    u.set_tri(0, 2, 100.0)?;
    println!("after set_tri(0, 2, 100):\n{}\n", u);
    println!("diagonal view:\n{}", u.diag_view());
    Ok(())
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    dense()?;
    vectors()?;
    structured()?;
    Ok(())
}
