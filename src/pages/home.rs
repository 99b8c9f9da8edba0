use leptos::prelude::*;

use crate::components::globe::GlobeCanvas;

/// Default Home Page
#[component]
pub fn Home() -> impl IntoView {
	view! {
		<div class="fullscreen-globe">
			<GlobeCanvas fullscreen=true />
			<div class="globe-overlay">
				<p class="tagline">"Innovate, Create, Dominate!"</p>
				<h1>"TechFest 2024"</h1>
			</div>
		</div>
	}
}
