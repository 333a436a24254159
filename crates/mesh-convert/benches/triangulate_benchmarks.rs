//! Benchmarks for mesh-convert operations.
//!
//! Run with: cargo bench -p mesh-convert
//!
//! To compare against baseline:
//! 1. First run: cargo bench -p mesh-convert -- --save-baseline main
//! 2. After changes: cargo bench -p mesh-convert -- --baseline main

use std::io::Cursor;
use std::path::Path;

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use mesh_convert::io::{read_obj, write_vtk};
use mesh_convert::{ConvertParams, PolygonMesh, Vertex};

// =============================================================================
// Test Mesh Generation
// =============================================================================

/// A `size` x `size` grid of quads in the XY plane.
fn create_grid(size: u32) -> PolygonMesh {
    let side = size + 1;
    let mut mesh = PolygonMesh::with_capacity((side * side) as usize, (size * size) as usize);

    for j in 0..side {
        for i in 0..side {
            mesh.ingest_vertex(Vertex::from_coords(i as f64, j as f64, 0.0));
        }
    }
    for j in 0..size {
        for i in 0..size {
            let a = j * side + i;
            mesh.ingest_face(vec![a, a + 1, a + side + 1, a + side]).unwrap();
        }
    }
    mesh
}

/// `count` disjoint regular polygons with `arity` vertices each.
fn create_polygon_fan(count: u32, arity: u32) -> PolygonMesh {
    let mut mesh = PolygonMesh::new();
    let mut next = 0u32;
    for _ in 0..count {
        let start = next;
        for k in 0..arity {
            let angle = k as f64 / arity as f64 * std::f64::consts::TAU;
            mesh.ingest_vertex(Vertex::from_coords(angle.cos(), angle.sin(), 0.0));
            next += 1;
        }
        mesh.ingest_face((start..next).collect()).unwrap();
    }
    mesh
}

fn to_obj_text(mesh: &PolygonMesh) -> String {
    let mut text = String::new();
    for v in mesh.vertices() {
        text.push_str(&format!("v {} {} {}\n", v.text[0], v.text[1], v.text[2]));
    }
    for face in mesh.faces() {
        let refs: Vec<String> = face.indices().iter().map(|i| (i + 1).to_string()).collect();
        text.push_str(&format!("f {}\n", refs.join(" ")));
    }
    text
}

// =============================================================================
// Benchmarks
// =============================================================================

fn bench_triangulation(c: &mut Criterion) {
    let mut group = c.benchmark_group("Triangulation");

    let meshes = [
        ("grid_32", create_grid(32)),
        ("grid_128", create_grid(128)),
        ("octagons_1k", create_polygon_fan(1000, 8)),
        ("20gons_1k", create_polygon_fan(1000, 20)),
    ];

    for (name, mesh) in &meshes {
        group.throughput(Throughput::Elements(mesh.face_count() as u64));
        group.bench_with_input(BenchmarkId::new("fan", name), mesh, |b, mesh| {
            b.iter(|| {
                let mut m = mesh.clone();
                black_box(m.triangulate().unwrap())
            })
        });
    }

    group.finish();
}

fn bench_io(c: &mut Criterion) {
    let mut group = c.benchmark_group("IO");
    let mesh = create_grid(128);
    let obj = to_obj_text(&mesh);
    let params = ConvertParams::default();

    group.throughput(Throughput::Bytes(obj.len() as u64));
    group.bench_function("read_obj/grid_128", |b| {
        b.iter(|| read_obj(Cursor::new(black_box(&obj)), Path::new("grid.obj"), &params).unwrap())
    });

    group.bench_function("write_vtk/grid_128", |b| {
        b.iter(|| {
            let mut out = Vec::with_capacity(obj.len());
            write_vtk(black_box(&mesh), &mut out, "grid.obj").unwrap();
            out
        })
    });

    group.finish();
}

criterion_group!(benches, bench_triangulation, bench_io);
criterion_main!(benches);
