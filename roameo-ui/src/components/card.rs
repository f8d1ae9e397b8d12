//! Card Component
//!
//! Layout shell shared by every section: image, title, subtitle lines,
//! description and a "View More" link, each shown only when present.

use leptos::*;
use roameo::render::{Card as CardModel, CardImage, CardLine, CardSize, Tone};

/// One card in a section grid
#[component]
pub fn Card(card: CardModel) -> impl IntoView {
    let size_class = match card.size {
        CardSize::Default => "h-[400px]",
        CardSize::Compact => "gap-2 min-h-[180px]",
    };
    let title = card.title.clone();

    view! {
        <div class=format!("bg-white rounded-xl shadow p-4 flex flex-col justify-between {}", size_class)>
            {card.image.map(|image| view! { <CardPicture image=image /> })}

            <h3 class="text-base font-bold text-gray-800 mb-1">{title}</h3>

            {(!card.subtitle.is_empty()).then(|| view! {
                <div class="text-sm text-gray-600">
                    {card.subtitle.into_iter().map(subtitle_line).collect_view()}
                </div>
            })}

            {(!card.description.is_empty()).then(|| view! {
                <div class="text-sm text-gray-600 space-y-1">
                    {card.description.into_iter().map(|line| view! { <p>{line}</p> }).collect_view()}
                </div>
            })}

            {card.link.map(|link| view! {
                <a
                    href=link.href
                    target="_blank"
                    rel="noopener noreferrer"
                    class="mt-2 text-blue-600 hover:underline text-sm"
                >
                    {link.label}
                </a>
            })}
        </div>
    }
}

fn subtitle_line(line: CardLine) -> impl IntoView {
    let class = match line.tone {
        Tone::Plain => "text-sm",
        Tone::Strong => "text-sm font-medium text-gray-800",
        Tone::Price => "text-sm font-semibold text-green-700",
    };
    view! { <p class=class>{line.text}</p> }
}

/// Image that swaps to the placeholder once if its URL fails
#[component]
fn CardPicture(image: CardImage) -> impl IntoView {
    let (src, set_src) = create_signal(image.src.clone());
    let alt = image.alt.clone();

    let on_error = move |_| {
        let current = src.get_untracked();
        if let Some(fallback) = image.fallback_for(&current) {
            set_src.set(fallback.to_string());
        }
    };

    view! {
        <img
            src=move || src.get()
            alt=alt
            referrerpolicy="no-referrer"
            on:error=on_error
            class="w-full h-48 object-cover rounded-lg mb-3"
        />
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use roameo::render::FALLBACK_IMAGE;
    use wasm_bindgen::JsCast;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    const BROKEN: &str = "https://invalid.example/broken.jpg";

    fn fire_error(target: &web_sys::Element) {
        let init = web_sys::EventInit::new();
        init.set_bubbles(true);
        let event = web_sys::Event::new_with_event_init_dict("error", &init).unwrap();
        target.dispatch_event(&event).unwrap();
    }

    #[wasm_bindgen_test]
    fn test_broken_image_switches_to_placeholder() {
        let document = leptos::document();
        let container = document
            .create_element("div")
            .unwrap()
            .unchecked_into::<web_sys::HtmlElement>();
        document.body().unwrap().append_child(&container).unwrap();

        let card = CardModel::new(Some("Hotel Chicago")).image(Some(BROKEN));
        mount_to(container.clone(), move || view! { <Card card=card /> });

        let img = container.query_selector("img").unwrap().unwrap();
        assert_eq!(img.get_attribute("src").as_deref(), Some(BROKEN));

        fire_error(&img);
        assert_eq!(img.get_attribute("src").as_deref(), Some(FALLBACK_IMAGE));

        // A missing placeholder must not loop
        fire_error(&img);
        assert_eq!(img.get_attribute("src").as_deref(), Some(FALLBACK_IMAGE));
    }
}
