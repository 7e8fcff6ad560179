use std::cell::RefCell;
use std::rc::Rc;

use leptos::html::Div;
use leptos::*;

use crate::application::ChartAdapter;
use crate::domain::{chart::ChartColors, logging::LogComponent, market_data::SeriesPoint};
use crate::infrastructure::{CanvasChartEngine, DomContainer, WindowResizeSource};
use crate::log_error;

const COMPONENT: LogComponent = LogComponent::Presentation("ChartComponent");

/// 📈 Area chart filling the width of its container.
///
/// The chart is rebuilt whenever `data` or `colors` change and released when the
/// component is unmounted.
#[component]
pub fn ChartComponent(
    #[prop(into)] data: MaybeSignal<Vec<SeriesPoint>>,
    #[prop(into, optional)] colors: MaybeSignal<ChartColors>,
) -> impl IntoView {
    let container_ref = create_node_ref::<Div>();
    let adapter = Rc::new(RefCell::new(ChartAdapter::new(CanvasChartEngine, WindowResizeSource)));

    create_effect({
        let adapter = Rc::clone(&adapter);
        move |_| {
            let container = container_ref.get().map(|div| DomContainer::new((*div).clone().into()));
            let colors = colors.get();
            data.with(|points| {
                if let Err(err) = adapter.borrow_mut().mount(container.as_ref(), points, &colors) {
                    log_error!(COMPONENT, "❌ failed to build chart: {}", err);
                }
            });
        }
    });

    on_cleanup(move || adapter.borrow_mut().unmount());

    view! { <div node_ref=container_ref class="chart-container"/> }
}
