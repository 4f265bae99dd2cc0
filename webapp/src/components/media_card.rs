use dioxus::prelude::*;

use portfolio::pages::MediaView;

// a framed image, an image that swaps on hover, or a looping muted video with the image as its
// poster
#[component]
pub fn MediaFrame(media: MediaView) -> Element {
    let MediaView {
        image,
        hover_image,
        video,
        alt,
    } = media;

    rsx! {
        div { class: "media-frame",
            match video {
                Some(video) => rsx! {
                    video {
                        src: "{video}",
                        poster: "{image}",
                        autoplay: true,
                        muted: true,
                        r#loop: true,
                        playsinline: true,
                        "aria-label": "{alt}",
                    }
                },
                None => rsx! {
                    img { src: "{image}", alt: "{alt}", loading: "lazy" }
                    if let Some(hover) = hover_image {
                        img {
                            class: "media-hover",
                            src: "{hover}",
                            alt: "",
                            loading: "lazy",
                        }
                    }
                },
            }
        }
    }
}
