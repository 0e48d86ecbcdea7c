use crate::render::markup::{class_attr, escape};

/// Pros and cons as two `<ul>` lists. An empty side is left out; both empty
/// yields an empty string.
pub fn render_pros_cons(pros: &[String], cons: &[String], class_prefix: &str) -> String {
    if pros.is_empty() && cons.is_empty() {
        return String::new();
    }

    let mut out = String::new();
    out.push_str("<div");
    out.push_str(&class_attr(class_prefix, &["pros-cons"]));
    out.push('>');
    push_list(&mut out, "Pros", "pros", pros, class_prefix);
    push_list(&mut out, "Cons", "cons", cons, class_prefix);
    out.push_str("</div>");
    out
}

fn push_list(out: &mut String, heading: &str, kind: &str, items: &[String], class_prefix: &str) {
    if items.is_empty() {
        return;
    }

    out.push_str("<section");
    out.push_str(&class_attr(class_prefix, &[kind]));
    out.push_str("><h4>");
    out.push_str(heading);
    out.push_str("</h4><ul>");
    for item in items {
        out.push_str("<li>");
        out.push_str(&escape(item));
        out.push_str("</li>");
    }
    out.push_str("</ul></section>");
}
