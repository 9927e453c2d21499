use leptos::*;

use crate::domain::chart::SparklineRenderer;

/// 📈 Price history as an SVG line over a faded area fill.
///
/// Renders nothing for fewer than two usable samples.
#[component]
pub fn Sparkline(history: Vec<f64>, #[prop(default = "#00f2fe")] color: &'static str) -> impl IntoView {
    let path = SparklineRenderer::default().render(&history);

    path.map(|path| {
        view! {
            <svg
                class="sparkline"
                width="100%"
                height="100%"
                viewBox=path.canvas().view_box()
                preserveAspectRatio="none"
            >
                <defs>
                    <linearGradient id="sparklineGradient" x1="0" x2="0" y1="0" y2="1">
                        <stop offset="0%" stop-color=color stop-opacity="0.4" />
                        <stop offset="100%" stop-color=color stop-opacity="0" />
                    </linearGradient>
                </defs>
                <path d=path.area_path() fill="url(#sparklineGradient)" stroke="none" />
                <polyline
                    points=path.polyline_points()
                    fill="none"
                    stroke=color
                    stroke-width="2"
                    vector-effect="non-scaling-stroke"
                />
            </svg>
        }
    })
}
