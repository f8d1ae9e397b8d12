//! Attractions Map Component
//!
//! Slippy map drawn from plain `<img>` tiles. Tiles and markers are
//! positioned relative to the container center, so no DOM measurement is
//! needed. The only state is which popup is open.

use leptos::*;
use roameo::map::{MapView, Marker, ScreenOffset};

const MARKER_ICON: &str = "https://unpkg.com/leaflet@1.9.3/dist/images/marker-icon.png";
const MARKER_SHADOW: &str = "https://unpkg.com/leaflet@1.9.3/dist/images/marker-shadow.png";

/// `left`/`top` for something placed at `offset` from the center
fn place(offset: ScreenOffset) -> String {
    format!(
        "left: calc(50% + {:.1}px); top: calc(50% + {:.1}px);",
        offset.dx, offset.dy
    )
}

#[component]
pub fn AttractionsMap(map: MapView) -> impl IntoView {
    let (open_popup, set_open_popup) = create_signal(None::<usize>);

    let tiles = map.tiles();
    let markers: Vec<(usize, Marker, ScreenOffset)> = map
        .markers
        .iter()
        .cloned()
        .zip(map.marker_offsets())
        .enumerate()
        .map(|(i, (marker, offset))| (i, marker, offset))
        .collect();
    let layer = map.tile_layer.clone();

    view! {
        <div
            class="relative h-[500px] rounded-2xl overflow-hidden shadow bg-gray-200"
            on:click=move |_| set_open_popup.set(None)
        >
            {tiles
                .into_iter()
                .map(|(tile, url)| view! {
                    <img
                        src=url
                        alt=""
                        draggable="false"
                        class="absolute w-[256px] h-[256px] max-w-none select-none"
                        style=place(tile.offset)
                    />
                })
                .collect_view()}

            {markers
                .into_iter()
                .map(|(index, marker, offset)| {
                    let popup = marker.popup;
                    let icon_alt = popup.title.clone();
                    view! {
                        <div class="absolute" style=place(offset)>
                            <img
                                src=MARKER_SHADOW
                                alt=""
                                class="absolute max-w-none pointer-events-none"
                                style="left: -12px; top: -41px;"
                            />
                            <img
                                src=MARKER_ICON
                                alt=icon_alt
                                class="absolute max-w-none cursor-pointer"
                                style="left: -12px; top: -41px;"
                                on:click=move |ev| {
                                    ev.stop_propagation();
                                    set_open_popup.update(|open| {
                                        *open = if *open == Some(index) { None } else { Some(index) };
                                    });
                                }
                            />
                            <Show when=move || open_popup.get() == Some(index)>
                                <div
                                    class="absolute z-10 -translate-x-1/2 bg-white rounded-lg shadow px-3 py-2 text-sm whitespace-nowrap"
                                    style="bottom: 48px; left: 0;"
                                    on:click=|ev| ev.stop_propagation()
                                >
                                    <strong>{popup.title.clone()}</strong>
                                    {popup.address.clone().map(|address| view! { <br /> {address} })}
                                </div>
                            </Show>
                        </div>
                    }
                })
                .collect_view()}

            <div class="absolute bottom-0 right-0 z-10 bg-white/80 px-1 text-xs text-gray-700">
                "© "
                <a href=layer.attribution_url target="_blank" rel="noopener noreferrer" class="text-blue-600">
                    {layer.attribution}
                </a>
            </div>
        </div>
    }
}
