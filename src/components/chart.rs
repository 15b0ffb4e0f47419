use charming::{
    Chart as CharmingChart,
    component::{Axis, Grid, Legend},
    element::{
        AxisLabel, AxisPointer, AxisPointerType, AxisType, Color, ItemStyle, LineStyle,
        LineStyleType, SplitLine, Tooltip, Trigger,
    },
    renderer::WasmRenderer,
    series::{Bar, Pie},
};
use std::rc::Rc;
use web_sys::HtmlElement;
use yew::prelude::*;

use crate::config::Config;
use crate::models::chart::{ChartModel, Slice, StackSeries};
use crate::utils::debounce::on_resize_settled;

const AXIS_COLOR: &str = "#94a3b8";
const GRID_COLOR: &str = "#334155";

#[derive(Properties, PartialEq)]
pub struct ChartProps {
    /// DOM id of the element ECharts draws into; unique per chart.
    pub id: AttrValue,
    pub model: Rc<ChartModel>,
}

#[function_component(Chart)]
pub fn chart(props: &ChartProps) -> Html {
    let container_ref = use_node_ref();

    {
        let container_ref = container_ref.clone();

        use_effect_with(
            (props.model.clone(), props.id.clone(), container_ref),
            |(model, id, container_ref)| {
                let listener = container_ref.cast::<HtmlElement>().and_then(|container| {
                    render_chart(&container, id, model);

                    let model = model.clone();
                    let id = id.clone();
                    on_resize_settled(Config::RESIZE_DEBOUNCE_MS, move || {
                        render_chart(&container, &id, &model);
                    })
                });

                move || drop(listener)
            },
        );
    }

    if props.model.is_empty() {
        return html! { <div class="chart-container chart-empty">{"No data"}</div> };
    }

    html! {
        <div class="chart-container" ref={container_ref}>
            <div id={props.id.clone()} />
        </div>
    }
}

fn render_chart(container: &HtmlElement, id: &str, model: &ChartModel) {
    let width = container.client_width() as u32;
    let height = container.client_height() as u32;

    if width == 0 || height == 0 {
        return;
    }

    let chart = build_chart(model);
    if let Err(e) = WasmRenderer::new(width, height).render(id, &chart) {
        web_sys::console::error_1(&format!("Render error for {id}: {e:?}").into());
    }
}

fn build_chart(model: &ChartModel) -> CharmingChart {
    match model {
        ChartModel::Pie { slices } => build_pie(slices),
        ChartModel::StackedBars { categories, series } => build_stacked_bars(categories, series),
    }
}

fn build_pie(slices: &[Slice]) -> CharmingChart {
    CharmingChart::new()
        .color(slices.iter().map(|s| Color::from(s.color.hex())).collect())
        .tooltip(Tooltip::new().trigger(Trigger::Item).formatter("{b}: ${c} ({d}%)"))
        .legend(Legend::new())
        .series(
            Pie::new()
                .radius("70%")
                .data(slices.iter().map(|s| (s.value, s.label)).collect()),
        )
}

fn build_stacked_bars(categories: &[String], series: &[StackSeries]) -> CharmingChart {
    let chart = CharmingChart::new()
        .tooltip(
            Tooltip::new()
                .trigger(Trigger::Axis)
                .axis_pointer(AxisPointer::new().type_(AxisPointerType::Shadow)),
        )
        .legend(Legend::new())
        .grid(
            Grid::new()
                .left("8%")
                .right("4%")
                .bottom("8%")
                .contain_label(true),
        )
        .x_axis(
            Axis::new()
                .type_(AxisType::Category)
                .data(categories.to_vec())
                .axis_label(AxisLabel::new().color(AXIS_COLOR)),
        )
        .y_axis(
            Axis::new()
                .type_(AxisType::Value)
                .axis_label(AxisLabel::new().color(AXIS_COLOR).formatter("${value}"))
                .split_line(
                    SplitLine::new().line_style(
                        LineStyle::new()
                            .color(GRID_COLOR)
                            .type_(LineStyleType::Dashed),
                    ),
                ),
        );

    series.iter().fold(chart, |chart, layer| {
        chart.series(
            Bar::new()
                .name(layer.name)
                .stack("cost")
                .item_style(ItemStyle::new().color(layer.color.hex()))
                .data(layer.values.clone()),
        )
    })
}
