use catalog::{default_catalog, Price, TierId};
use checkout::{CheckoutFlow, CheckoutStep, DetailsExpansion};

#[test]
fn vvip_purchase_walkthrough_against_the_shipped_catalog() {
    let catalog = default_catalog();
    catalog.validate().expect("shipped catalog");

    let vvip = catalog.tier(&TierId::new("vvip")).expect("vvip tier");
    assert!(vvip.highlighted);
    assert_eq!(vvip.price, Price::Etb(590));

    let mut flow = CheckoutFlow::default();
    let mut expansion = DetailsExpansion::default();

    // Browse the extras before buying.
    expansion.toggle(&vvip.id);
    assert!(expansion.is_expanded(&vvip.id));
    assert_eq!(vvip.details.len(), 3);

    // Buy opens the modal on the payment step showing 590 ETB.
    assert!(flow.request_purchase(vvip));
    assert_eq!(flow.step(), Some(CheckoutStep::Payment));
    assert_eq!(vvip.price.to_string(), "590 ETB");

    // Done advances to the confirmation step; the selection is untouched.
    flow.acknowledge_transfer();
    assert_eq!(flow.step(), Some(CheckoutStep::Confirmation));
    assert_eq!(flow.selected_tier(), Some(&vvip.id));

    // Closing clears everything; a fresh purchase starts over at payment.
    flow.dismiss();
    assert_eq!(flow, CheckoutFlow::Closed);
    assert!(flow.request_purchase(vvip));
    assert_eq!(flow.step(), Some(CheckoutStep::Payment));
}

#[test]
fn premium_tier_cannot_enter_the_flow_while_others_browse_details() {
    let catalog = default_catalog();
    let premium = catalog.tier(&TierId::new("premium")).expect("premium tier");
    let standard = catalog.tier(&TierId::new("standard")).expect("standard tier");

    let mut flow = CheckoutFlow::default();
    let mut expansion = DetailsExpansion::default();

    expansion.toggle(&standard.id);
    assert!(!flow.request_purchase(premium));
    assert_eq!(flow, CheckoutFlow::Closed);

    // The failed buy attempt leaves the expansion state alone too.
    assert!(expansion.is_expanded(&standard.id));

    // Expanding another card collapses the first; the flow stays closed.
    expansion.toggle(&premium.id);
    assert!(!expansion.is_expanded(&standard.id));
    assert!(expansion.is_expanded(&premium.id));
    assert!(!flow.is_open());
}
