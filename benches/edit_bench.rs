use criterion::{Criterion, criterion_group, criterion_main};
use jsonedit::{delete, set, set_raw};

fn bench_set(c: &mut Criterion) {
    let mut group = c.benchmark_group("set");
    let cases: Vec<(&str, &str, &str)> = vec![
        (r#"{"a":1}"#, "a", "2"),
        (r#"{"a":1,"b":2,"c":3,"d":4,"e":5}"#, "e", "9"),
        (r#"[1,2,3,4,5,6,7,8,9,10]"#, "-1", "11"),
        (r#"[{"env":[{"name":"K","value":"t"}]}]"#, "0.env.0.value", "\"new\""),
    ];
    for (i, (doc, path, value)) in cases.into_iter().enumerate() {
        group.bench_function(format!("case_{i}"), |b| {
            b.iter(|| {
                let out = set_raw(std::hint::black_box(doc), std::hint::black_box(path), std::hint::black_box(value)).unwrap();
                std::hint::black_box(out);
            })
        });
    }
    group.finish();
}

fn bench_set_typed(c: &mut Criterion) {
    let mut group = c.benchmark_group("set_typed");
    group.bench_function("deep_synthesis", |b| {
        b.iter(|| {
            let out = set(std::hint::black_box(""), std::hint::black_box("b.this.4"), 4i64).unwrap();
            std::hint::black_box(out);
        })
    });
    group.finish();
}

fn bench_wildcard(c: &mut Criterion) {
    let mut group = c.benchmark_group("wildcard");
    let doc = {
        let mut s = String::from("[");
        for i in 0..200 {
            if i > 0 {
                s.push(',');
            }
            s.push_str(&format!(r#"{{"env":[{{"name":"K{i}","value":"t"}}]}}"#));
        }
        s.push(']');
        s
    };
    group.bench_function("broadcast_200_elements", |b| {
        b.iter(|| {
            let out = set(std::hint::black_box(&doc), std::hint::black_box("#.env.#.value"), "new").unwrap();
            std::hint::black_box(out);
        })
    });
    group.finish();
}

fn bench_delete(c: &mut Criterion) {
    let mut group = c.benchmark_group("delete");
    group.bench_function("middle_array_element", |b| {
        b.iter(|| {
            let out = delete(std::hint::black_box("[123,456,789]"), std::hint::black_box("1")).unwrap();
            std::hint::black_box(out);
        })
    });
    group.finish();
}

criterion_group!(benches, bench_set, bench_set_typed, bench_wildcard, bench_delete);
criterion_main!(benches);
