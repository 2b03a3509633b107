use std::sync::Arc;

use tokio::task::JoinHandle;

use business::application::cart::controller::CartController;

/// Logs every committed cart until the controller goes away.
pub fn spawn(controller: &Arc<CartController>) -> JoinHandle<()> {
    let mut receiver = controller.subscribe();

    tokio::spawn(async move {
        while receiver.changed().await.is_ok() {
            let (size, total_units) = {
                let cart = receiver.borrow_and_update();
                (cart.len(), cart.total_units())
            };
            tracing::info!(products = size, total_units, "Cart updated");
        }
    })
}
