//! Region-resolver protocol: built-in resolvers and protocol extensibility

use eyeshot::{
    DrivingContext, FloatingBounds, FloatingMatchSettings, FloatingRegionByRectangle,
    GetFloatingRegion, GetRegion, IgnoreRegionByRectangle, Point, RectangleSize, Region,
    Screenshot, StaticContext, ViewportScreenshot,
};

fn blank_shot() -> ViewportScreenshot {
    ViewportScreenshot::blank(Region::new(0, 0, 64, 64))
}

#[test]
fn fixed_resolver_is_deterministic() {
    let resolver = IgnoreRegionByRectangle::new(Region::new(1, 2, 3, 4));
    let shot = blank_shot();

    let contexts = [
        StaticContext::new(RectangleSize::new(1280, 720)),
        StaticContext::new(RectangleSize::new(320, 240)).with_scroll(Point::new(100, 100)),
    ];
    for ctx in &contexts {
        assert_eq!(
            resolver.get_regions(ctx, &shot),
            vec![Region::new(1, 2, 3, 4)]
        );
    }
}

#[test]
fn floating_resolver_pairs_region_and_bounds() {
    let bounds = FloatingBounds::new(5, 10, 15, 20);
    let resolver = FloatingRegionByRectangle::new(Region::new(0, 0, 5, 5), bounds);
    let shot = blank_shot();
    let ctx = StaticContext::default();

    let resolved = resolver.get_regions(&ctx, &shot);
    assert_eq!(
        resolved,
        vec![FloatingMatchSettings::new(Region::new(0, 0, 5, 5), bounds)]
    );
}

#[test]
fn resolvers_work_through_trait_objects() {
    let resolvers: Vec<Box<dyn GetRegion>> = vec![
        Box::new(IgnoreRegionByRectangle::new(Region::new(0, 0, 1, 1))),
        Box::new(IgnoreRegionByRectangle::new(Region::new(2, 2, 1, 1))),
    ];
    let shot = blank_shot();
    let ctx = StaticContext::default();

    let all: Vec<Region> = resolvers
        .iter()
        .flat_map(|r| r.get_regions(&ctx, &shot))
        .collect();
    assert_eq!(all, vec![Region::new(0, 0, 1, 1), Region::new(2, 2, 1, 1)]);
}

/// A resolver kind defined outside the crate: splits its rectangle into
/// per-row strips. Exercises the open protocol plus the ordering and
/// possibly-empty contracts.
struct RowStrips {
    region: Region,
}

impl GetRegion for RowStrips {
    fn get_regions(
        &self,
        _context: &dyn DrivingContext,
        _screenshot: &dyn Screenshot,
    ) -> Vec<Region> {
        (0..self.region.height)
            .map(|row| {
                Region::new(self.region.x, self.region.y + row as i32, self.region.width, 1)
            })
            .collect()
    }
}

#[test]
fn custom_resolver_preserves_its_own_ordering() {
    let resolver = RowStrips {
        region: Region::new(4, 10, 8, 3),
    };
    let shot = blank_shot();
    let ctx = StaticContext::default();

    let rows = resolver.get_regions(&ctx, &shot);
    assert_eq!(
        rows,
        vec![
            Region::new(4, 10, 8, 1),
            Region::new(4, 11, 8, 1),
            Region::new(4, 12, 8, 1),
        ]
    );
}

#[test]
fn resolver_matching_nothing_returns_empty_sequence() {
    let resolver = RowStrips {
        region: Region::new(0, 0, 8, 0),
    };
    let shot = blank_shot();
    let ctx = StaticContext::default();
    assert!(resolver.get_regions(&ctx, &shot).is_empty());
}

#[test]
fn specifications_serialize_round_trip() -> anyhow::Result<()> {
    let resolver = FloatingRegionByRectangle::new(
        Region::new(3, 4, 10, 12),
        FloatingBounds::uniform(6),
    );
    let json = serde_json::to_string(&resolver)?;
    let back: FloatingRegionByRectangle = serde_json::from_str(&json)?;
    assert_eq!(back, resolver);

    // coordinate-space tags keep their upstream wire names
    let region_json = serde_json::to_value(Region::new(1, 1, 2, 2))?;
    assert_eq!(region_json["coordinates_type"], "SCREENSHOT_AS_IS");
    Ok(())
}
