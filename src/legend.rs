use crate::constants::{
    LEGEND_COLLAPSED_CLASS, LEGEND_COLOR_CLASS, LEGEND_GLYPH_COLLAPSED, LEGEND_GLYPH_EXPANDED,
    LEGEND_ICON_CLASS, LEGEND_ITEM_CLASS, LEGEND_TOGGLE_ID,
};
use crate::core::{Room, RoomCatalog};
use crate::dom;
use web_sys as web;

/// Append one entry per unique room to the legend container.
pub fn build(
    document: &web::Document,
    legend: &web::Element,
    catalog: &RoomCatalog,
) -> anyhow::Result<usize> {
    let rooms = catalog.unique();
    for room in &rooms {
        let item = legend_item(document, room)?;
        legend
            .append_child(&item)
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    }
    log::info!("[legend] {} rooms", rooms.len());
    Ok(rooms.len())
}

fn legend_item(document: &web::Document, room: &Room) -> anyhow::Result<web::Element> {
    let create = |tag: &str| {
        document
            .create_element(tag)
            .map_err(|e| anyhow::anyhow!("{:?}", e))
    };
    let item = create("div")?;
    item.set_class_name(LEGEND_ITEM_CLASS);

    let swatch = create("div")?;
    swatch.set_class_name(LEGEND_COLOR_CLASS);
    dom::set_style(&swatch, "background-color", &room.color.to_css());

    let icon = create("span")?;
    icon.set_class_name(LEGEND_ICON_CLASS);
    icon.set_text_content(Some(&room.icon));

    let name = create("span")?;
    name.set_text_content(Some(&room.name));

    for child in [&swatch, &icon, &name] {
        item.append_child(child)
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    }
    Ok(item)
}

#[inline]
pub fn is_collapsed(legend: &web::Element) -> bool {
    legend.class_list().contains(LEGEND_COLLAPSED_CLASS)
}

/// Collapse/expand the legend and update the toggle glyph.
pub fn toggle(legend: &web::Element, button: &web::Element) {
    _ = legend.class_list().toggle(LEGEND_COLLAPSED_CLASS);
    let glyph = if is_collapsed(legend) {
        LEGEND_GLYPH_COLLAPSED
    } else {
        LEGEND_GLYPH_EXPANDED
    };
    button.set_text_content(Some(glyph));
}

// The toggle button is optional page furniture
pub fn wire_toggle(document: &web::Document, legend: &web::Element) {
    let Some(button) = document.get_element_by_id(LEGEND_TOGGLE_ID) else {
        log::debug!("[legend] no #{} button", LEGEND_TOGGLE_ID);
        return;
    };
    let legend = legend.clone();
    let target = button.clone();
    dom::add_listener(&target, "click", move || toggle(&legend, &button));
}
