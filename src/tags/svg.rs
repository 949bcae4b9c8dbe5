//! SVG tag factories. Names keep SVG's camelCase spelling.

#![allow(non_snake_case)]

use crate::dialect::Dialect;
use crate::node::{Child, Element};

container_tags!(Dialect::Svg;
    a, animateTransform, clipPath, defs, desc, feComponentTransfer, feComposite,
    feConvolveMatrix, feDiffuseLighting, feDistantLight, feFlood, feFuncA, feFuncB,
    feFuncG, feFuncR, feMerge, feMergeNode, feMorphology, feOffset, fePointLight,
    feSpecularLighting, feSpotLight, feTile, feTurbulence, filter, foreignObject, g,
    linearGradient, marker, mask, metadata, pattern, radialGradient, script, set, style,
    svg, switch, symbol, text, textPath, title, tspan, view,
);

leaf_tags!(Dialect::Svg;
    animate, animateMotion, circle, ellipse, feBlend, feColorMatrix, feDisplacementMap,
    feDropShadow, feGaussianBlur, feImage, image, line, mpath, path, polygon, polyline,
    rect, stop,
);

/// `<use />` element.
pub fn r#use() -> Element {
    Element::assemble(Dialect::Svg, "use", Child::Empty)
}
