//! Common source text fixtures for tests.

use classref::{ClassDecl, SourceModel};

/// Ref paths declared by every class of the big model, in order.
pub const BIG_MODEL_REFS: [&str; 7] = ["c", "a.a.a.a", "b.b.b", "c.c.c", "a.b.c.d", "b.b.b.b", "d.d.d.d"];

/// Offset (modulo n) from class `i` to the type of each ref's target.
pub const BIG_MODEL_TARGET_TYPES: [i64; 7] = [-1, 0, 3, -3, -2, 4, -8];

/// Offset (modulo n) from class `i` to the owner of each ref's target.
pub const BIG_MODEL_TARGET_OWNERS: [i64; 7] = [0, 0, 2, -2, 0, 3, -6];

/// Index `i + offset` modulo `n`.
pub fn wrap(i: usize, offset: i64, n: usize) -> usize {
    (i as i64 + offset).rem_euclid(n as i64) as usize
}

/// `n` classes `A0..A{n-1}`; class `Ai` has attributes `a: Ai`, `b: A(i+1)`,
/// `c: A(i-1)`, `d: A(i-2)` (indices mod n) and the refs [`BIG_MODEL_REFS`].
pub fn big_model_source(n: usize) -> String {
    let mut text = String::new();
    for i in 0..n {
        text.push_str(&format!("class A{i} {{\n"));
        text.push_str(&format!("  a: A{i}\n"));
        text.push_str(&format!("  b: A{}\n", (i + 1) % n));
        text.push_str(&format!("  c: A{}\n", (i + n - 1) % n));
        text.push_str(&format!("  d: A{}\n", (i + 2 * n - 2) % n));
        text.push_str("  {\n");
        for path in BIG_MODEL_REFS {
            text.push_str(&format!("  ref {path}\n"));
        }
        text.push_str("  }\n}\n");
    }
    text
}

/// The same model as [`big_model_source`], built without the parser.
pub fn big_model_ast(n: usize) -> SourceModel {
    let mut source = SourceModel::new();
    for i in 0..n {
        let mut class = ClassDecl::new(format!("A{i}"))
            .with_attribute("a", format!("A{i}"))
            .with_attribute("b", format!("A{}", (i + 1) % n))
            .with_attribute("c", format!("A{}", (i + n - 1) % n))
            .with_attribute("d", format!("A{}", (i + 2 * n - 2) % n));
        for path in BIG_MODEL_REFS {
            class = class.with_ref(path);
        }
        source.push_class(class);
    }
    source
}

pub const PERSON_MODEL: &str = r#"
# people and where they live
class Person {
    home: Address
    friend: Person
    {
        ref home.city
        ref friend.friend.home.city
        ref friend
    }
}

class Address {
    city: City
    owner: Person
}

class City { }
"#;

pub const SELF_CYCLE: &str = "class X { a: X { ref a.a.a.a } }";
