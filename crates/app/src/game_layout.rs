//! Layout model for the game's on-screen panels.

use macroquad::math::Rect;
use taffy::prelude::*;
use taffy::{TaffyError, TaffyTree};

pub struct LayoutNodes {
    root: NodeId,
    status: NodeId,
    board: NodeId,
    footer: NodeId,
    events: NodeId,
    info: NodeId,
}

pub struct FrameLayout {
    pub status: Rect,
    pub board: Rect,
    pub events: Rect,
    pub info: Rect,
}

pub fn setup_layout(taffy: &mut TaffyTree<()>) -> Result<LayoutNodes, TaffyError> {
    let status = taffy.new_leaf(Style {
        size: Size { width: percent(1.0), height: length(40.0) },
        margin: taffy::Rect { left: zero(), right: zero(), top: zero(), bottom: length(12.0) },
        ..Default::default()
    })?;
    let board = taffy.new_leaf(Style {
        flex_grow: 1.0,
        margin: taffy::Rect { left: zero(), right: zero(), top: zero(), bottom: length(12.0) },
        ..Default::default()
    })?;
    let events = taffy.new_leaf(Style { flex_grow: 1.6, ..Default::default() })?;
    let info = taffy.new_leaf(Style {
        flex_grow: 1.0,
        margin: taffy::Rect { left: length(15.0), right: zero(), top: zero(), bottom: zero() },
        ..Default::default()
    })?;
    let footer = taffy.new_with_children(
        Style {
            display: Display::Flex,
            flex_direction: FlexDirection::Row,
            size: Size { width: percent(1.0), height: length(130.0) },
            flex_grow: 0.0,
            ..Default::default()
        },
        &[events, info],
    )?;
    let root = taffy.new_with_children(
        Style {
            display: Display::Flex,
            flex_direction: FlexDirection::Column,
            size: Size { width: percent(1.0), height: percent(1.0) },
            padding: taffy::Rect {
                left: length(20.0),
                right: length(20.0),
                top: length(20.0),
                bottom: length(20.0),
            },
            ..Default::default()
        },
        &[status, board, footer],
    )?;
    Ok(LayoutNodes { root, status, board, footer, events, info })
}

pub fn compute_frame_layout(
    taffy: &mut TaffyTree<()>,
    nodes: &LayoutNodes,
    viewport_width: f32,
    viewport_height: f32,
) -> Result<FrameLayout, TaffyError> {
    let available_size = Size {
        width: AvailableSpace::Definite(viewport_width),
        height: AvailableSpace::Definite(viewport_height),
    };
    taffy.compute_layout(nodes.root, available_size)?;

    let l_root = taffy.layout(nodes.root)?;
    let l_footer = taffy.layout(nodes.footer)?;

    Ok(FrameLayout {
        status: panel_rect(taffy.layout(nodes.status)?, &[l_root]),
        board: panel_rect(taffy.layout(nodes.board)?, &[l_root]),
        events: panel_rect(taffy.layout(nodes.events)?, &[l_root, l_footer]),
        info: panel_rect(taffy.layout(nodes.info)?, &[l_root, l_footer]),
    })
}

fn panel_rect(layout: &taffy::Layout, parents: &[&taffy::Layout]) -> Rect {
    let mut x = layout.location.x;
    let mut y = layout.location.y;
    for parent in parents {
        x += parent.location.x;
        y += parent.location.y;
    }

    Rect::new(x, y, layout.size.width, layout.size.height)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn board_takes_the_space_between_status_and_footer() {
        let mut taffy = TaffyTree::new();
        let nodes = setup_layout(&mut taffy).expect("layout tree builds");
        let layout = compute_frame_layout(&mut taffy, &nodes, 900.0, 820.0).expect("layout");

        assert_eq!(layout.status.y, 20.0);
        assert_eq!(layout.board.y, 20.0 + 40.0 + 12.0);
        assert_eq!(layout.board.h, 820.0 - 40.0 - 40.0 - 12.0 - 12.0 - 130.0);
        assert_eq!(layout.events.y, layout.board.y + layout.board.h + 12.0);
        assert!(layout.events.w > layout.info.w);
        assert_eq!(layout.info.x + layout.info.w, 880.0);
    }
}
