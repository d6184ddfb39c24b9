use std::{cell::RefCell, rc::Rc};

use dioxus::prelude::*;

use storefront::layout::{Breakpoint, ContainerParams, DEFAULT_BAND, GridParams};

use crate::common::browser::{WindowListener, viewport_width};

// use_breakpoint_provider
//
// the current breakpoint band, re-classified on every resize.  the signal is only written
// when the band actually changes, so components reading it re-render on band changes and
// not on every pixel of a drag-resize.  called once near the top of the tree; everything
// below shares the one resize listener through use_breakpoint()
pub fn use_breakpoint_provider() -> Signal<Breakpoint> {
    let mut band = use_signal(|| {
        viewport_width()
            .map(Breakpoint::from_width)
            .unwrap_or(DEFAULT_BAND)
    });

    let listener = use_hook(move || {
        Rc::new(RefCell::new(WindowListener::new("resize", move || {
            let Some(width) = viewport_width() else {
                return;
            };

            let next = Breakpoint::from_width(width);
            if *band.peek() != next {
                band.set(next);
            }
        })))
    });

    use_drop(move || {
        listener.borrow_mut().take();
    });

    use_context_provider(|| band)
}

pub fn use_breakpoint() -> Signal<Breakpoint> {
    use_context::<Signal<Breakpoint>>()
}

#[derive(Clone, PartialEq, Props)]
pub struct MobileContainerProps {
    children: Element,
    #[props(default)]
    class: String,
}

// MobileContainer
//
// page-width wrapper: edge to edge with a small gutter on phones, centered under a max
// width everywhere else
#[component]
pub fn MobileContainer(props: MobileContainerProps) -> Element {
    let band = use_breakpoint();
    let style = ContainerParams::for_band(Some(band())).to_css();

    rsx! {
        div { class: "{props.class}", style: "{style}", {props.children} }
    }
}

#[derive(Clone, PartialEq, Props)]
pub struct IndustryStandardGridProps {
    children: Element,

    // how many GridItems should share a row; the grid works out the column span
    #[props(default = 3)]
    per_row: u32,
}

// spans are handed to GridItem through context so that callers only ever say "three per
// row" rather than thinking in columns for each band
#[derive(Clone, Copy, PartialEq)]
struct GridSpan(u32);

#[component]
pub fn IndustryStandardGrid(props: IndustryStandardGridProps) -> Element {
    let band = use_breakpoint();
    let style = GridParams::for_band(Some(band())).to_css();

    let span = use_memo(use_reactive((&props.per_row,), move |(per_row,)| {
        GridSpan(GridParams::for_band(Some(band())).item_span(per_row))
    }));
    use_context_provider(|| span);

    rsx! {
        div { class: "industry-grid", style: "{style}", {props.children} }
    }
}

#[component]
pub fn GridItem(children: Element) -> Element {
    let span = use_context::<Memo<GridSpan>>();
    let GridSpan(columns) = span();

    rsx! {
        div { style: "grid-column: span {columns}; min-width: 0;", {children} }
    }
}
