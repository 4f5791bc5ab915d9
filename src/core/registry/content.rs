//! Built-in documentation pages.

use crate::core::types::{DocumentationEntry, Section};

pub(super) fn builtin_entries() -> Vec<DocumentationEntry> {
    vec![
        DocumentationEntry::new("", "Documentation")
            .with_summary("Reference, demos and more for building web UIs in Python")
            .with_keywords(&["overview", "getting started", "reference"])
            .with_section(
                Section::new("Overview")
                    .paragraph(
                        "NiceGUI is an easy-to-use, Python-based UI framework that shows up in \
                         your web browser. You can create buttons, dialogs, Markdown, 3D scenes, \
                         plots and much more.",
                    )
                    .paragraph("Pick a topic from the sections below or use the search."),
            )
            .with_section(
                Section::new("Installation")
                    .paragraph("Install the package from PyPI and run your script.")
                    .code("python3 -m pip install nicegui"),
            ),
        DocumentationEntry::new("section_text_elements", "Text Elements")
            .with_summary("Labels, links, chat messages and Markdown")
            .with_keywords(&["label", "link", "markdown", "html"])
            .with_category("text")
            .with_section(
                Section::new("Label")
                    .paragraph("Displays some text.")
                    .code("ui.label('some label')"),
            )
            .with_section(
                Section::new("Markdown Element")
                    .paragraph("Renders Markdown onto the page.")
                    .code("ui.markdown('This is **Markdown**.')"),
            ),
        DocumentationEntry::new("section_controls", "Controls")
            .with_summary("Buttons, toggles, sliders, inputs and other interactive elements")
            .with_keywords(&["button", "slider", "switch", "input", "checkbox"])
            .with_category("controls")
            .with_section(
                Section::new("Button")
                    .paragraph(
                        "This element is based on Quasar's QBtn component. The color parameter \
                         accepts a Quasar color, a Tailwind color or a CSS color.",
                    )
                    .code("ui.button('Click me!', on_click=lambda: ui.notify('You clicked me!'))"),
            )
            .with_section(
                Section::new("Slider")
                    .paragraph("Selects a number in a range with a draggable handle.")
                    .code("slider = ui.slider(min=0, max=100, value=50)"),
            ),
        DocumentationEntry::new("section_binding_properties", "Binding Properties")
            .with_summary("Keep model values and UI elements in sync automatically")
            .with_keywords(&["bind", "binding", "reactive", "model"])
            .with_category("controls")
            .with_section(
                Section::new("Bindings")
                    .paragraph(
                        "Element properties like text, value or visibility can be bound to \
                         model attributes, dictionaries and other elements.",
                    )
                    .code("ui.label().bind_text_from(demo, 'number')"),
            ),
        DocumentationEntry::new("section_page_layout", "Page Layout")
            .with_summary("Rows, columns, cards, tabs and dialogs")
            .with_keywords(&["row", "column", "card", "grid", "dialog", "tabs"])
            .with_category("layout")
            .with_section(
                Section::new("Rows and Columns")
                    .paragraph("Arrange child elements horizontally or vertically.")
                    .code("with ui.row():\n    ui.label('left')\n    ui.label('right')"),
            )
            .with_section(
                Section::new("Dark Mode")
                    .paragraph(
                        "Switch between light and dark appearance. The choice is remembered per \
                         browser.",
                    )
                    .code("dark = ui.dark_mode()\nui.button('Dark', on_click=dark.enable)"),
            ),
        DocumentationEntry::new("section_styling_appearance", "Styling & Appearance")
            .with_summary("Classes, props, colors and CSS")
            .with_keywords(&["style", "css", "tailwind", "theme", "color"])
            .with_category("layout")
            .with_section(
                Section::new("Styling")
                    .paragraph("Elements accept Tailwind classes, Quasar props and inline CSS.")
                    .code("ui.label('Red text').classes('text-red-600')"),
            ),
        DocumentationEntry::new("section_pages_routing", "Pages & Routing")
            .with_summary("Page decorators, path parameters and storage")
            .with_keywords(&["page", "route", "storage", "session", "url"])
            .with_category("pages")
            .with_section(
                Section::new("Page")
                    .paragraph(
                        "A page is created per request. Path parameters are passed to the page \
                         builder as arguments.",
                    )
                    .code("@ui.page('/other_page')\ndef other_page():\n    ui.label('Welcome')"),
            )
            .with_section(
                Section::new("Storage")
                    .paragraph(
                        "Browser storage keeps small values such as preferences for each \
                         browser, signed with a secret key.",
                    ),
            ),
        DocumentationEntry::new("section_configuration_deployment", "Configuration & Deployment")
            .with_summary("Run parameters, Docker and reverse proxies")
            .with_keywords(&["run", "docker", "deploy", "port", "reload"])
            .with_category("pages")
            .with_section(
                Section::new("Run Parameters")
                    .paragraph("Host, port, title, reconnect timeout and reload behavior.")
                    .code("ui.run(port=8080, reconnect_timeout=10.0)"),
            ),
    ]
}
