use yew::prelude::*;

use crate::models::summary::PresentedRow;

#[derive(Properties, PartialEq)]
pub struct AggregationTableProps {
    /// Heading of the label column, e.g. "State" or "Shift".
    pub label_heading: AttrValue,
    pub rows: Vec<PresentedRow>,
    /// Show the share-of-time column.
    #[prop_or(false)]
    pub with_share: bool,
}

#[function_component(AggregationTable)]
pub fn aggregation_table(props: &AggregationTableProps) -> Html {
    html! {
        <table class="aggregation-table">
            <thead>
                <tr>
                    <th>{&props.label_heading}</th>
                    <th class="num">{"Hours"}</th>
                    <th class="num">{"Energy"}</th>
                    <th class="num">{"Cost"}</th>
                    if props.with_share {
                        <th class="num">{"% Time"}</th>
                    }
                </tr>
            </thead>
            <tbody>
                { for props.rows.iter().map(|row| render_row(row, props.with_share)) }
            </tbody>
        </table>
    }
}

fn render_row(row: &PresentedRow, with_share: bool) -> Html {
    let row_class = classes!(
        if row.depth == 0 { "row-parent" } else { "row-child" },
        row.unknown.then_some("row-unknown"),
    );
    let swatch = format!("background-color: {};", row.color);

    html! {
        <tr class={row_class}>
            <td>
                <span class="swatch" style={swatch}></span>
                {&row.label}
            </td>
            <td class="num">{&row.hours}</td>
            <td class="num">{&row.energy}</td>
            <td class="num">{&row.cost}</td>
            if with_share {
                <td class="num">{row.share.clone().unwrap_or_default()}</td>
            }
        </tr>
    }
}
