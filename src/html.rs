use crate::catalog::Product;
use crate::similarity::index::Recommendation;

const HEAD: &str = "<!DOCTYPE html><html><head><meta charset=\"utf-8\"><title>lookalike</title></head><body>";
const TAIL: &str = "</body></html>";

pub fn escape(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

fn push_product(html: &mut String, product: &Product) {
    html.push_str("<h4>");
    html.push_str(&escape(&product.name));
    html.push_str("</h4>Category: ");
    html.push_str(&escape(&product.category));
    html.push_str("<br />Tags: ");
    html.push_str(&escape(&product.tags));
    html.push_str("<br />");
    html.push_str(&escape(&product.description));
    for (column, value) in &product.attributes {
        html.push_str("<br />");
        html.push_str(&escape(column));
        html.push_str(": ");
        html.push_str(&escape(value));
    }
}

fn push_recommend_form(html: &mut String, name: &str) {
    html.push_str("<form method=\"post\" action=\"/recommend\">");
    html.push_str("<input type=\"hidden\" name=\"product\" value=\"");
    html.push_str(&escape(name));
    html.push_str("\" /><button type=\"submit\">Similar products</button></form>");
}

/// Full product listing, one recommend button per product.
pub fn render_index(products: &[Product]) -> String {
    let mut html = String::from(HEAD);
    html.push_str("<h2>Products</h2><ul>");
    for product in products {
        html.push_str("<li>");
        push_product(&mut html, product);
        push_recommend_form(&mut html, &product.name);
        html.push_str("</li>");
    }
    html.push_str("</ul>");
    html.push_str(TAIL);
    html
}

/// The same page is used whether or not the product was found.
pub fn render_recommendations(recommendation: &Recommendation) -> String {
    let mut html = String::from(HEAD);
    match recommendation.product() {
        Some(product) => {
            html.push_str("<h2>Because you looked at</h2>");
            push_product(&mut html, product);
        }
        None => html.push_str("<h2>Product not found</h2>"),
    }

    html.push_str("<h3>Recommendations</h3><ol>");
    for scored in recommendation.similar() {
        html.push_str("<li>");
        push_product(&mut html, scored.product);
        html.push_str("<br />Similarity: ");
        html.push_str(&format!("{:.3}", scored.score));
        html.push_str("</li>");
    }
    html.push_str("</ol><a href=\"/\">All products</a>");
    html.push_str(TAIL);
    html
}
