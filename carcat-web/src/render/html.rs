//! HTML renderer
//!
//! Pages are assembled with `write!` into a `String`. Every value that comes
//! from the dataset or the request goes through [`Escaped`].

use std::fmt::{self, Write};

use carcat_common::catalog::{CarModel, CarModelSummary, Comparison, Dataset, SearchQuery};

use super::{RenderError, Renderer};

const STYLE: &str = r#"
        body {
            font-family: 'Segoe UI', Tahoma, Geneva, Verdana, sans-serif;
            background-color: #1a1a1a;
            color: #e0e0e0;
            max-width: 960px;
            margin: 0 auto;
            padding: 20px;
            line-height: 1.6;
        }
        h1 { color: #4a9eff; border-bottom: 2px solid #3a3a3a; padding-bottom: 10px; }
        a { color: #4a9eff; }
        form { background: #2a2a2a; padding: 15px 20px; border-radius: 6px; margin-bottom: 20px; }
        input, select, button { padding: 6px 10px; margin: 4px; }
        .car { display: flex; gap: 20px; background: #2a2a2a; padding: 15px; margin-bottom: 12px; border-radius: 6px; }
        .car img, td img { max-width: 220px; border-radius: 4px; }
        table { width: 100%; border-collapse: collapse; }
        th, td { border: 1px solid #3a3a3a; padding: 8px; text-align: left; }
"#;

/// HTML-escapes the wrapped text when displayed
pub struct Escaped<'a>(pub &'a str);

impl fmt::Display for Escaped<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for c in self.0.chars() {
            match c {
                '&' => f.write_str("&amp;")?,
                '<' => f.write_str("&lt;")?,
                '>' => f.write_str("&gt;")?,
                '"' => f.write_str("&quot;")?,
                '\'' => f.write_str("&#39;")?,
                _ => f.write_char(c)?,
            }
        }
        Ok(())
    }
}

/// Server-side HTML views
#[derive(Debug, Clone, Default)]
pub struct HtmlRenderer;

impl HtmlRenderer {
    pub fn new() -> Self {
        Self
    }

    fn open_page(out: &mut String, title: &str) -> fmt::Result {
        write!(
            out,
            r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{}</title>
    <style>{}</style>
</head>
<body>
<h1>{}</h1>
"#,
            Escaped(title),
            STYLE,
            Escaped(title)
        )
    }

    fn close_page(out: &mut String, back_link: bool) -> fmt::Result {
        if back_link {
            writeln!(out, r#"<p><a href="/">Back to catalog</a></p>"#)?;
        }
        writeln!(out, "</body>\n</html>")
    }

    fn write_model_options(out: &mut String, name: &str, models: &[CarModel]) -> fmt::Result {
        writeln!(out, r#"<select name="{}">"#, name)?;
        writeln!(out, r#"    <option value="">Select a car model</option>"#)?;
        for model in models {
            writeln!(
                out,
                r#"    <option value="{}">{} ({})</option>"#,
                model.id,
                Escaped(&model.name),
                model.year
            )?;
        }
        writeln!(out, "</select>")
    }

    fn write_summary(out: &mut String, summary: &CarModelSummary) -> fmt::Result {
        let model = &summary.model;
        let specs = &model.specifications;
        write!(
            out,
            r#"<div class="car">
    <img src="/img/{image}" alt="{name}">
    <div>
        <h2>{name} ({year})</h2>
        <p>Manufacturer: {maker}, {country} (founded {founded})</p>
        <p>Engine: {engine} &middot; {hp} hp &middot; {transmission} &middot; {drivetrain}</p>
    </div>
</div>
"#,
            image = Escaped(&model.image),
            name = Escaped(&model.name),
            year = model.year,
            maker = Escaped(&summary.manufacturer_name),
            country = Escaped(&summary.manufacturer_country),
            founded = summary.manufacturer_founding_year,
            engine = Escaped(&specs.engine),
            hp = specs.horsepower,
            transmission = Escaped(&specs.transmission),
            drivetrain = Escaped(&specs.drivetrain),
        )
    }

    fn write_compare_row(
        out: &mut String,
        label: &str,
        first: impl fmt::Display,
        second: impl fmt::Display,
    ) -> fmt::Result {
        writeln!(
            out,
            "<tr><th>{}</th><td>{}</td><td>{}</td></tr>",
            label, first, second
        )
    }
}

impl Renderer for HtmlRenderer {
    fn render_home(&self, dataset: &Dataset) -> Result<String, RenderError> {
        let mut out = String::new();
        Self::open_page(&mut out, "Car Catalog")?;

        writeln!(
            out,
            r#"<form action="/search" method="get">
    <input type="text" name="q" placeholder="Model name">
    <input type="text" name="year" placeholder="Year">
    <button type="submit">Search</button>
</form>"#
        )?;

        writeln!(out, r#"<form action="/compare" method="post">"#)?;
        Self::write_model_options(&mut out, "carModelID1", dataset.car_models())?;
        Self::write_model_options(&mut out, "carModelID2", dataset.car_models())?;
        writeln!(out, r#"<button type="submit">Compare</button>"#)?;
        writeln!(out, "</form>")?;

        Self::close_page(&mut out, false)?;
        Ok(out)
    }

    fn render_search_results(
        &self,
        query: &SearchQuery,
        results: &[CarModelSummary],
    ) -> Result<String, RenderError> {
        let mut out = String::new();
        Self::open_page(&mut out, "Search Results")?;

        write!(out, "<p>{} result(s) for \"{}\"", results.len(), Escaped(&query.text))?;
        if !query.year.is_empty() {
            write!(out, " in {}", Escaped(&query.year))?;
        }
        writeln!(out, "</p>")?;

        if results.is_empty() {
            writeln!(out, "<p>No car models found.</p>")?;
        }
        for summary in results {
            Self::write_summary(&mut out, summary)?;
        }

        Self::close_page(&mut out, true)?;
        Ok(out)
    }

    fn render_comparison(&self, comparison: &Comparison) -> Result<String, RenderError> {
        let (a, b) = (&comparison.first, &comparison.second);
        let mut out = String::new();
        Self::open_page(&mut out, "Compare Car Models")?;

        writeln!(out, "<table>")?;
        Self::write_compare_row(&mut out, "Model", Escaped(&a.name), Escaped(&b.name))?;
        Self::write_compare_row(
            &mut out,
            "",
            format_args!(r#"<img src="/img/{}" alt="{}">"#, Escaped(&a.image), Escaped(&a.name)),
            format_args!(r#"<img src="/img/{}" alt="{}">"#, Escaped(&b.image), Escaped(&b.name)),
        )?;
        Self::write_compare_row(&mut out, "Year", a.year, b.year)?;
        Self::write_compare_row(
            &mut out,
            "Engine",
            Escaped(&a.specifications.engine),
            Escaped(&b.specifications.engine),
        )?;
        Self::write_compare_row(
            &mut out,
            "Horsepower",
            a.specifications.horsepower,
            b.specifications.horsepower,
        )?;
        Self::write_compare_row(
            &mut out,
            "Transmission",
            Escaped(&a.specifications.transmission),
            Escaped(&b.specifications.transmission),
        )?;
        Self::write_compare_row(
            &mut out,
            "Drivetrain",
            Escaped(&a.specifications.drivetrain),
            Escaped(&b.specifications.drivetrain),
        )?;
        writeln!(out, "</table>")?;

        Self::close_page(&mut out, true)?;
        Ok(out)
    }
}
