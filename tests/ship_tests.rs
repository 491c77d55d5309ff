use polyship::{rotations, shape, Rotation, ShipKind, FLEET, FLEET_INSTANCES, TOTAL_SHIP_CELLS};

/// Clockwise quarter turn of a row-major mask.
fn turn_clockwise(width: usize, height: usize, mask: &[u8]) -> (usize, usize, Vec<u8>) {
    let mut out = Vec::with_capacity(mask.len());
    for r in 0..width {
        for c in 0..height {
            out.push(mask[(height - 1 - c) * width + r]);
        }
    }
    (height, width, out)
}

#[test]
fn carrier_masks_are_kept_as_authored() {
    let shapes = rotations(ShipKind::Carrier);
    assert_eq!(shapes[0].mask(), &[0, 1, 0, 1, 1, 1, 1, 1, 0, 1, 0, 0]);
    assert_eq!(shapes[1].mask(), &[0, 1, 0, 1, 1, 1, 0, 1, 0, 0, 1, 1]);
    assert_eq!(shapes[2].mask(), &[0, 0, 1, 0, 1, 1, 1, 1, 1, 0, 1, 0]);
    assert_eq!(shapes[3].mask(), &[1, 1, 0, 0, 1, 0, 1, 1, 1, 0, 1, 0]);
    assert_eq!((shapes[0].width(), shapes[0].height()), (4, 3));
    assert_eq!((shapes[1].width(), shapes[1].height()), (3, 4));
    assert_eq!((shapes[2].width(), shapes[2].height()), (4, 3));
    assert_eq!((shapes[3].width(), shapes[3].height()), (3, 4));
}

#[test]
fn carrier_rotations_follow_each_other_clockwise() {
    let shapes = rotations(ShipKind::Carrier);
    for i in 0..4 {
        let cur = shapes[i];
        let next = shapes[(i + 1) % 4];
        let (w, h, mask) = turn_clockwise(cur.width(), cur.height(), cur.mask());
        assert_eq!((w, h), (next.width(), next.height()));
        assert_eq!(mask.as_slice(), next.mask(), "rotation {} -> {}", i, (i + 1) % 4);
    }
}

#[test]
fn straight_ships_alternate_orientation() {
    for kind in [ShipKind::Battleship, ShipKind::Destroyer] {
        let horizontal = shape(kind, Rotation::R0);
        let vertical = shape(kind, Rotation::R90);
        assert_eq!(horizontal.height(), 1);
        assert_eq!(vertical.width(), 1);
        assert_eq!(shape(kind, Rotation::R180), horizontal);
        assert_eq!(shape(kind, Rotation::R270), vertical);
    }
    for rotation in Rotation::ALL {
        assert_eq!(shape(ShipKind::Scout, rotation).cell_count(), 1);
    }
}

/// The carrier is annotated with size 12 but every authored mask sets only
/// 7 cells. The mask wins: 12 is kept as the 4x3 bounding box and a full
/// fleet covers 25 cells, not 35.
#[test]
fn carrier_size_annotation_is_its_bounding_box() {
    assert_eq!(ShipKind::Carrier.footprint(), 12);
    for s in rotations(ShipKind::Carrier) {
        assert_eq!(s.cell_count(), 7);
        assert_eq!(s.width() * s.height(), 12);
    }
    assert_eq!(ShipKind::Carrier.cell_count(), 7);
}

#[test]
fn fleet_composition_is_fixed() {
    assert_eq!(ShipKind::Battleship.fleet_count(), 1);
    assert_eq!(ShipKind::Carrier.fleet_count(), 2);
    assert_eq!(ShipKind::Destroyer.fleet_count(), 2);
    assert_eq!(ShipKind::Scout.fleet_count(), 3);

    let instances: usize = FLEET.iter().map(|(_, n)| n).sum();
    assert_eq!(instances, FLEET_INSTANCES);

    let cells: usize = FLEET.iter().map(|(k, n)| k.cell_count() * n).sum();
    assert_eq!(cells, TOTAL_SHIP_CELLS);
    assert_eq!(TOTAL_SHIP_CELLS, 25);
}

#[test]
fn fleet_is_laid_out_largest_first() {
    let sizes: Vec<usize> = FLEET.iter().map(|(k, _)| k.cell_count()).collect();
    let mut sorted = sizes.clone();
    sorted.sort_by(|a, b| b.cmp(a));
    assert_eq!(sizes, sorted);
}

#[test]
fn projection_rejects_boxes_leaving_the_board() {
    let carrier = shape(ShipKind::Carrier, Rotation::R0);
    assert!(carrier.project(6, 7).is_some());
    assert!(carrier.project(7, 7).is_none());
    assert!(carrier.project(6, 8).is_none());

    let cells: Vec<usize> = carrier.project(0, 0).unwrap().iter_ones().collect();
    assert_eq!(cells, vec![1, 3, 10, 11, 12, 13, 21]);
}
