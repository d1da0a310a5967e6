use crate::model::ChartData;
use plotters::prelude::*;
use plotters::style::full_palette::ORANGE;

/// 6.4 x 4.8 inch figure at 300 dpi.
const WIDTH: u32 = 1920;
const HEIGHT: u32 = 1440;

const TITLE: &str = "Two-level TLB and Only Support 4KB Page Size";

/// Render the three-bar locality chart as a PNG at `out_path`, overwriting
/// any existing file.
///
/// Groups with an undefined mean get no bar; the axes and the remaining
/// bars are still drawn, so a log with missing blocks renders a sparse
/// chart instead of failing.
pub fn render_bar_chart(data: &ChartData, out_path: &str) -> anyhow::Result<()> {
    let root = BitMapBackend::new(out_path, (WIDTH, HEIGHT)).into_drawing_area();
    root.fill(&WHITE)?;

    // Top out 10% above the tallest bar; an all-undefined chart still needs
    // a usable axis, so fall back to the full 0..1 rate range.
    let tallest = data
        .groups
        .iter()
        .filter_map(|g| g.mean)
        .fold(0.0_f64, f64::max);
    let y_max = if tallest > 0.0 { tallest * 1.1 } else { 1.0 };

    let labels: Vec<&str> = data.groups.iter().map(|g| g.label.as_str()).collect();

    let mut chart = ChartBuilder::on(&root)
        .caption(TITLE, ("sans-serif", 48))
        .margin(40)
        .x_label_area_size(110)
        .y_label_area_size(150)
        .build_cartesian_2d(
            (0u32..data.groups.len() as u32).into_segmented(),
            0.0..y_max,
        )?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_desc("Locality")
        .y_desc("TLB hit rate")
        .axis_desc_style(("sans-serif", 40))
        .label_style(("sans-serif", 32))
        .x_label_formatter(&|seg| match seg {
            SegmentValue::CenterOf(v) => labels
                .get(*v as usize)
                .map(|s| s.to_string())
                .unwrap_or_default(),
            _ => String::new(),
        })
        .draw()?;

    chart.draw_series(
        Histogram::vertical(&chart)
            .style(ORANGE.filled())
            .margin(60)
            .data(
                data.groups
                    .iter()
                    .enumerate()
                    .filter_map(|(i, g)| g.mean.map(|m| (i as u32, m))),
            ),
    )?;

    root.present()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::build_chart_data;

    fn temp_png(tag: &str) -> std::path::PathBuf {
        std::env::temp_dir().join(format!("tlb_chart_{}_{}.png", tag, std::process::id()))
    }

    #[test]
    fn renders_full_chart() {
        let rates: Vec<f64> = (1..=30).map(|v| v as f64 / 100.0).collect();
        let data = build_chart_data(&rates);

        let out = temp_png("full");
        render_bar_chart(&data, out.to_str().unwrap()).unwrap();

        let meta = std::fs::metadata(&out).unwrap();
        assert!(meta.len() > 0);
        std::fs::remove_file(&out).unwrap();
    }

    #[test]
    fn renders_with_all_means_undefined() {
        // Zero-match logs still reach the render stage; the chart comes out
        // bar-less but valid.
        let data = build_chart_data(&[]);

        let out = temp_png("empty");
        render_bar_chart(&data, out.to_str().unwrap()).unwrap();

        assert!(out.exists());
        std::fs::remove_file(&out).unwrap();
    }
}
